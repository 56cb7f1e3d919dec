//! Picker session state for the TUI.
//!
//! [`App`] wraps the core [`Navigation`] together with the frontend-only
//! bits (mode, status line, quit flag). Like the navigation state it wraps,
//! every transition consumes `self` and returns the next `App`.

use kaopick_core::{
    Catalog, ClipboardSink, Command, Config, Exporter, FlatEntry, Locales, Navigation, NotifySink,
};

/// What the picker is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Typing a query and moving through results.
    Picking,
    /// A dismissible message (e.g. a failed copy) covers the list.
    Notice(String),
}

/// One open picker window.
pub struct App<'a> {
    mode: AppMode,
    nav: Navigation<'a>,
    catalog: &'a Catalog,
    locales: &'a Locales,
    config: &'a Config,
    should_quit: bool,
    status_message: Option<String>,
    /// The text copied by the last successful export, if any.
    copied: Option<String>,
}

impl<'a> App<'a> {
    /// Creates a session in its initial state (empty query, first entry highlighted).
    pub fn new(catalog: &'a Catalog, locales: &'a Locales, config: &'a Config) -> Self {
        Self {
            mode: AppMode::Picking,
            nav: Navigation::new(catalog.entries()),
            catalog,
            locales,
            config,
            should_quit: false,
            status_message: None,
            copied: None,
        }
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn nav(&self) -> &Navigation<'a> {
        &self.nav
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn locales(&self) -> &'a Locales {
        self.locales
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    /// The highlighted entry, if anything matches.
    pub fn selected(&self) -> Option<&'a FlatEntry> {
        self.nav.select()
    }

    /// Forwards a navigation command to the core.
    pub fn handle_command(self, command: Command) -> Self {
        Self {
            nav: self.nav.apply(command),
            ..self
        }
    }

    /// Appends a character to the query and re-filters.
    pub fn query_push_char(self, c: char) -> Self {
        let query = format!("{}{c}", self.nav.query());
        self.handle_command(Command::SetQuery(query))
    }

    /// Removes the last character from the query and re-filters.
    pub fn query_pop_char(self) -> Self {
        let mut query = self.nav.query().to_string();
        if query.pop().is_none() {
            return self;
        }
        self.handle_command(Command::SetQuery(query))
    }

    /// Clears the query, keeping the current selection if it is still visible.
    pub fn query_clear(self) -> Self {
        self.handle_command(Command::SetQuery(String::new()))
    }

    /// Escape clears a non-empty query; on an empty query it closes the picker.
    pub fn escape(self) -> Self {
        if self.nav.query().is_empty() {
            self.quit()
        } else {
            self.handle_command(Command::Reset)
        }
    }

    pub fn quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    /// Closes the picker if it is configured to do so when focus is lost.
    pub fn focus_lost(self) -> Self {
        if self.config.behavior.close_on_focus_loss {
            tracing::debug!("focus lost, closing picker");
            self.quit()
        } else {
            self
        }
    }

    pub fn with_status(self, message: String) -> Self {
        Self {
            status_message: Some(message),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    pub fn with_notice(self, message: String) -> Self {
        Self {
            mode: AppMode::Notice(message),
            ..self
        }
    }

    pub fn dismiss_notice(self) -> Self {
        Self {
            mode: AppMode::Picking,
            ..self
        }
    }

    /// Exports the highlighted entry through `exporter`.
    ///
    /// On success the picker closes (or reports the copy, when
    /// `auto_close_on_copy` is off). On failure a notice is shown and the
    /// navigation state is left untouched so the user can retry.
    pub fn copy_selected<C: ClipboardSink, N: NotifySink>(self, exporter: &Exporter<C, N>) -> Self {
        let Some(entry) = self.selected() else {
            return self;
        };
        let locales = self.locales;
        match exporter.export(entry.text(), locales.t("notification_title")) {
            Ok(()) => {
                let app = Self {
                    copied: Some(entry.text().to_string()),
                    ..self
                };
                if app.config.behavior.auto_close_on_copy {
                    app.quit()
                } else {
                    app.with_status(locales.format("copied", &[("text", entry.text())]))
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, entry = entry.text(), "copy failed");
                self.with_notice(locales.format("copy_failed", &[("error", &e.to_string())]))
            }
        }
    }
}
