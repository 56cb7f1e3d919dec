//! kaopick core library — UI-agnostic kaomoji picker logic.
//!
//! `kaopick-core` holds everything the picker does that is not drawing or
//! talking to the desktop: loading the catalog, filtering it as the user
//! types, tracking the highlighted entry, and handing the chosen string to
//! injectable clipboard/notification sinks. The terminal frontend
//! (`kaopick-tui`) is a thin shell around it.
//!
//! # Modules
//!
//! - [`catalog`] — Catalog document loading and the typed category tree.
//! - [`search`] — Substring filtering that preserves catalog order.
//! - [`nav`] — The cursor state machine over filtered results.
//! - [`event`] — Commands sent from the UI to the navigation state.
//! - [`i18n`] — Locale tables with default-language fallback.
//! - [`sink`] — Clipboard and notification capabilities.
//! - [`config`] — TOML-based user settings.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod i18n;
pub mod nav;
pub mod search;
pub mod sink;

pub use catalog::loader::{default_document, load_catalog};
pub use catalog::model::{Catalog, Category, CategoryBody, FlatEntry};
pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use i18n::{LocaleTable, Locales};
pub use nav::state::{NavState, Navigation};
pub use search::filter::{filter, FilterResult, Group};
pub use sink::{ClipboardSink, CommandClipboard, CommandNotifier, CommandSpec, Exporter, NotifySink};

/// Normalises a string to NFC (composed) form.
///
/// Catalog text and queries are both passed through this so that composed
/// and decomposed spellings of the same characters compare equal.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
