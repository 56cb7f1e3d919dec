//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/default.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// All fields have sensible defaults so the picker works without a config
/// file. Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        match Self::load(path) {
            Err(CoreError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }
}

/// Language and data file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Active language tag, e.g. `"en"` or `"tr"`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Language consulted for keys missing from the active one.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Catalog document; defaults to `kaomojis.json` in the config directory.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Locale directory; defaults to `locales/` in the config directory.
    #[serde(default)]
    pub locale_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            default_language: default_language(),
            catalog_path: None,
            locale_dir: None,
        }
    }
}

/// What happens after a kaomoji is copied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub auto_close_on_copy: bool,
    #[serde(default = "default_true")]
    pub show_notifications: bool,
    /// Quit when the terminal reports that it lost focus.
    #[serde(default = "default_true")]
    pub close_on_focus_loss: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            auto_close_on_copy: true,
            show_notifications: true,
            close_on_focus_loss: true,
        }
    }
}

/// External programs used for the clipboard and notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// Clipboard commands tried in order; each receives the text on stdin.
    #[serde(default = "default_clipboard")]
    pub clipboard: Vec<String>,
    /// Notification program, invoked as `<program> <title> <text>`.
    #[serde(default = "default_notification")]
    pub notification: String,
    #[serde(default = "default_timeout_ms")]
    pub clipboard_timeout_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub notification_timeout_ms: u64,
}

impl CommandsConfig {
    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_millis(self.clipboard_timeout_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            clipboard: default_clipboard(),
            notification: default_notification(),
            clipboard_timeout_ms: default_timeout_ms(),
            notification_timeout_ms: default_timeout_ms(),
        }
    }
}

/// Display preferences for the picker list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_category_headers: bool,
    #[serde(default = "default_true")]
    pub show_counts: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_category_headers: true,
            show_counts: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

fn default_clipboard() -> Vec<String> {
    vec![
        "wl-copy".to_string(),
        "xclip -selection clipboard".to_string(),
        "pbcopy".to_string(),
    ]
}

fn default_notification() -> String {
    "notify-send".to_string()
}

fn default_timeout_ms() -> u64 {
    1000
}
