//! Commands sent from the UI to the core.
//!
//! The frontend translates key presses into [`Command`]s and feeds them to
//! [`Navigation::apply`](crate::nav::state::Navigation::apply). Selecting an
//! entry is not a command: it does not change state, so the UI reads it
//! directly with [`Navigation::select`](crate::nav::state::Navigation::select).

/// A state change the UI requests from the navigation state.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search query and re-filter.
    SetQuery(String),
    /// Move the cursor to the next entry, wrapping at the end.
    CursorNext,
    /// Move the cursor to the previous entry, wrapping at the start.
    CursorPrevious,
    /// Jump to the first entry of the next category group.
    NextGroup,
    /// Jump to the first entry of the previous category group.
    PreviousGroup,
    /// Clear the query and return to the initial state.
    Reset,
}
