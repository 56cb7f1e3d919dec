//! Cursor state machine over the filtered catalog.
//!
//! [`Navigation`] owns the current query, its [`FilterResult`] and the
//! cursor. It is either [`NavState::Empty`] (nothing matches) or
//! [`NavState::Active`] with the cursor inside the result. Every transition
//! consumes `self` and returns the next state, so one picker session owns
//! exactly one value and threads it through its event handlers.

use crate::catalog::model::FlatEntry;
use crate::event::Command;
use crate::search::filter::{filter, FilterResult};

/// Observable state of a [`Navigation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// The filter result is empty; there is no cursor.
    Empty,
    /// The filter result is non-empty and `cursor < len`.
    Active { cursor: usize },
}

/// Query, filtered view and cursor for one picker session.
#[derive(Debug, Clone)]
pub struct Navigation<'a> {
    entries: &'a [FlatEntry],
    query: String,
    result: FilterResult<'a>,
    cursor: Option<usize>,
}

impl<'a> Navigation<'a> {
    /// Creates the initial state: the empty query over all `entries`.
    ///
    /// Starts [`NavState::Active`] at position `0` when the catalog has any
    /// entries, [`NavState::Empty`] otherwise.
    pub fn new(entries: &'a [FlatEntry]) -> Self {
        Self {
            entries,
            query: String::new(),
            result: FilterResult::default(),
            cursor: None,
        }
        .on_query_changed("")
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> &FilterResult<'a> {
        &self.result
    }

    /// Cursor position within [`Navigation::result`], `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn state(&self) -> NavState {
        match self.cursor {
            Some(cursor) => NavState::Active { cursor },
            None => NavState::Empty,
        }
    }

    /// The entry under the cursor. Does not change state.
    pub fn select(&self) -> Option<&'a FlatEntry> {
        self.cursor.and_then(|c| self.result.get(c))
    }

    /// Re-filters with `query`.
    ///
    /// If the previously selected entry is still in the new result, the
    /// cursor follows it. Otherwise it resets to the first match, or the
    /// state becomes [`NavState::Empty`].
    pub fn on_query_changed(self, query: &str) -> Self {
        let previous = self.select().map(FlatEntry::index);
        let result = filter(self.entries, query);
        let cursor = previous
            .and_then(|index| result.position_of(index))
            .or_else(|| (!result.is_empty()).then_some(0));

        tracing::debug!(query, ?cursor, matched = result.len(), "query changed");
        Self {
            query: query.to_string(),
            result,
            cursor,
            ..self
        }
    }

    /// Advances the cursor by one, wrapping to the first entry. No-op when empty.
    pub fn move_next(self) -> Self {
        let len = self.result.len();
        let cursor = self.cursor.map(|c| (c + 1) % len);
        Self { cursor, ..self }
    }

    /// Retreats the cursor by one, wrapping to the last entry. No-op when empty.
    pub fn move_previous(self) -> Self {
        let len = self.result.len();
        let cursor = self.cursor.map(|c| (c + len - 1) % len);
        Self { cursor, ..self }
    }

    /// Jumps to the first entry of the next category group, wrapping.
    pub fn move_next_group(self) -> Self {
        self.move_group(1)
    }

    /// Jumps to the first entry of the previous category group, wrapping.
    pub fn move_previous_group(self) -> Self {
        self.move_group(-1)
    }

    fn move_group(self, step: isize) -> Self {
        let Some(cursor) = self.cursor else {
            return self;
        };
        let starts = self.result.group_starts();
        let count = starts.len() as isize;
        // Index of the group containing the cursor: last start <= cursor.
        let current = starts.partition_point(|&s| s <= cursor) as isize - 1;
        let target = (current + step).rem_euclid(count) as usize;
        Self {
            cursor: Some(starts[target]),
            ..self
        }
    }

    /// Discards the query and selection, returning to the initial state.
    pub fn reset(self) -> Self {
        Self::new(self.entries)
    }

    /// Applies a UI [`Command`].
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::SetQuery(query) => self.on_query_changed(&query),
            Command::CursorNext => self.move_next(),
            Command::CursorPrevious => self.move_previous(),
            Command::NextGroup => self.move_next_group(),
            Command::PreviousGroup => self.move_previous_group(),
            Command::Reset => self.reset(),
        }
    }
}
