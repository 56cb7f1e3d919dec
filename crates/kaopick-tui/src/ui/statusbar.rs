//! Single-row status bar at the bottom of the picker.
//!
//! Shows the highlighted position, the key hint, and the last status
//! message (which replaces the hint while present).

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub match_count: usize,
    pub cursor: Option<usize>,
    pub status_message: Option<&'a str>,
    pub hint: &'a str,
}

/// Formats the `n/total` position indicator.
pub fn position_text(cursor: Option<usize>, match_count: usize) -> String {
    match cursor {
        Some(cursor) if match_count > 0 => format!(" {}/{match_count}", cursor + 1),
        _ => " 0/0".to_owned(),
    }
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>) {
    let bg = Color::DarkGray;

    let trailing = match props.status_message {
        Some(msg) => Span::styled(
            format!("  {msg}"),
            Style::default()
                .fg(Color::Green)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ),
        None => Span::styled(
            format!("  {}", props.hint),
            Style::default().fg(Color::Gray).bg(bg),
        ),
    };

    let line = Line::from(vec![
        Span::styled(
            position_text(props.cursor, props.match_count),
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        trailing,
    ]);

    f.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
