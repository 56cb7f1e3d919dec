use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kaopick_core::Command;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Append a character to the query.
    QueryChar(char),
    /// Remove the last character from the query.
    QueryBackspace,
    /// Empty the query without resetting the selection.
    QueryClear,
    /// Copy the highlighted kaomoji.
    Copy,
    /// Clear the query, or close the picker when it is already empty.
    Escape,
    /// Close the picker.
    Quit,
    /// Close the notice popup.
    DismissNotice,
    /// No action.
    None,
}

/// Maps a key press to an action for the current mode.
pub fn handle_key(key: KeyEvent, mode: &AppMode) -> InputAction {
    match mode {
        AppMode::Picking => handle_picking_key(key),
        AppMode::Notice(_) => handle_notice_key(key),
    }
}

fn handle_picking_key(key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') | KeyCode::Char('j') => InputAction::Command(Command::CursorNext),
            KeyCode::Char('p') | KeyCode::Char('k') => InputAction::Command(Command::CursorPrevious),
            KeyCode::Char('u') => InputAction::QueryClear,
            KeyCode::Char('r') => InputAction::Command(Command::Reset),
            KeyCode::Char('c') | KeyCode::Char('q') | KeyCode::Char('w') => InputAction::Quit,
            // Terminals that report Ctrl+Tab deliver it as Tab with CONTROL.
            KeyCode::Tab => InputAction::Command(Command::NextGroup),
            KeyCode::BackTab => InputAction::Command(Command::PreviousGroup),
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => InputAction::Escape,
        KeyCode::Enter => InputAction::Copy,
        KeyCode::Backspace => InputAction::QueryBackspace,
        KeyCode::Down => InputAction::Command(Command::CursorNext),
        KeyCode::Up => InputAction::Command(Command::CursorPrevious),
        KeyCode::Tab | KeyCode::PageDown => InputAction::Command(Command::NextGroup),
        KeyCode::BackTab | KeyCode::PageUp => InputAction::Command(Command::PreviousGroup),
        KeyCode::Char(c) => InputAction::QueryChar(c),
        _ => InputAction::None,
    }
}

fn handle_notice_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        _ => InputAction::DismissNotice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        key_with_mod(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn picking(key: KeyEvent) -> InputAction {
        handle_key(key, &AppMode::Picking)
    }

    // --- Picking mode ---

    #[test]
    fn arrows_move_cursor() {
        assert_eq!(
            picking(key(KeyCode::Down)),
            InputAction::Command(Command::CursorNext)
        );
        assert_eq!(
            picking(key(KeyCode::Up)),
            InputAction::Command(Command::CursorPrevious)
        );
    }

    #[test]
    fn emacs_and_vim_style_ctrl_keys_move_cursor() {
        assert_eq!(picking(ctrl('n')), InputAction::Command(Command::CursorNext));
        assert_eq!(picking(ctrl('j')), InputAction::Command(Command::CursorNext));
        assert_eq!(picking(ctrl('p')), InputAction::Command(Command::CursorPrevious));
        assert_eq!(picking(ctrl('k')), InputAction::Command(Command::CursorPrevious));
    }

    #[test]
    fn plain_letters_go_to_the_query() {
        assert_eq!(picking(key(KeyCode::Char('j'))), InputAction::QueryChar('j'));
        assert_eq!(picking(key(KeyCode::Char('q'))), InputAction::QueryChar('q'));
        assert_eq!(picking(key(KeyCode::Char('ω'))), InputAction::QueryChar('ω'));
    }

    #[test]
    fn shifted_letters_go_to_the_query() {
        let action = picking(key_with_mod(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(action, InputAction::QueryChar('A'));
    }

    #[test]
    fn tab_moves_between_groups() {
        assert_eq!(
            picking(key(KeyCode::Tab)),
            InputAction::Command(Command::NextGroup)
        );
        assert_eq!(
            picking(key_with_mod(KeyCode::BackTab, KeyModifiers::SHIFT)),
            InputAction::Command(Command::PreviousGroup)
        );
        assert_eq!(
            picking(key_with_mod(KeyCode::Tab, KeyModifiers::CONTROL)),
            InputAction::Command(Command::NextGroup)
        );
    }

    #[test]
    fn enter_copies() {
        assert_eq!(picking(key(KeyCode::Enter)), InputAction::Copy);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(picking(key(KeyCode::Backspace)), InputAction::QueryBackspace);
        assert_eq!(picking(ctrl('u')), InputAction::QueryClear);
        assert_eq!(picking(ctrl('r')), InputAction::Command(Command::Reset));
    }

    #[test]
    fn escape_and_quit_keys() {
        assert_eq!(picking(key(KeyCode::Esc)), InputAction::Escape);
        assert_eq!(picking(ctrl('c')), InputAction::Quit);
        assert_eq!(picking(ctrl('q')), InputAction::Quit);
        assert_eq!(picking(ctrl('w')), InputAction::Quit);
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(picking(key(KeyCode::F(5))), InputAction::None);
        assert_eq!(picking(ctrl('z')), InputAction::None);
    }

    // --- Notice mode ---

    #[test]
    fn notice_dismiss_keys() {
        let mode = AppMode::Notice("Could not copy".to_string());
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            assert_eq!(handle_key(key(code), &mode), InputAction::DismissNotice);
        }
    }

    #[test]
    fn notice_swallows_typing() {
        let mode = AppMode::Notice("Could not copy".to_string());
        assert_eq!(
            handle_key(key(KeyCode::Char('a')), &mode),
            InputAction::DismissNotice
        );
        assert_eq!(handle_key(key(KeyCode::Down), &mode), InputAction::DismissNotice);
    }

    #[test]
    fn notice_ctrl_c_quits() {
        let mode = AppMode::Notice("Could not copy".to_string());
        assert_eq!(handle_key(ctrl('c'), &mode), InputAction::Quit);
    }
}
