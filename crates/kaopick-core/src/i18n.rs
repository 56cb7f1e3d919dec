//! Localised UI strings.
//!
//! Each language is a flat JSON object mapping message keys to display
//! strings (`<dir>/<tag>.json`). Lookups try the active language, then the
//! default language, and finally degrade to the raw key. English and
//! Turkish tables are compiled in, so the picker is usable without any
//! locale files on disk.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// A single language's key → string table.
pub type LocaleTable = HashMap<String, String>;

const BUILTIN: &[(&str, &str)] = &[
    ("en", include_str!("../../../config/locales/en.json")),
    ("tr", include_str!("../../../config/locales/tr.json")),
];

/// Parses a locale table from JSON text.
///
/// # Errors
///
/// [`CoreError::ConfigParse`] if the text is not a flat string-to-string object.
pub fn parse_table(json: &str) -> CoreResult<LocaleTable> {
    serde_json::from_str(json).map_err(|e| CoreError::ConfigParse(e.to_string()))
}

/// Reads a locale table from `path`.
///
/// # Errors
///
/// - [`CoreError::NotFound`] / [`CoreError::PermissionDenied`] when unreadable.
/// - [`CoreError::ConfigParse`] when the JSON is invalid.
pub fn load_table(path: &Path) -> CoreResult<LocaleTable> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
    parse_table(&content)
}

/// Returns the compiled-in table for `tag`, if there is one.
pub fn builtin_table(tag: &str) -> Option<LocaleTable> {
    let (_, json) = BUILTIN.iter().find(|(t, _)| *t == tag)?;
    match parse_table(json) {
        Ok(table) => Some(table),
        Err(e) => {
            tracing::error!(tag, error = %e, "built-in locale table is invalid");
            None
        }
    }
}

/// Active and default locale tables.
#[derive(Debug, Clone, Default)]
pub struct Locales {
    active_tag: String,
    active: LocaleTable,
    default_tag: String,
    default: LocaleTable,
}

impl Locales {
    pub fn new(
        active_tag: impl Into<String>,
        active: LocaleTable,
        default_tag: impl Into<String>,
        default: LocaleTable,
    ) -> Self {
        Self {
            active_tag: active_tag.into(),
            active,
            default_tag: default_tag.into(),
            default,
        }
    }

    /// Uses only the compiled-in tables, with English as the default.
    pub fn builtin(language: &str) -> Self {
        Self::new(
            language,
            resolve_table(None, language),
            "en",
            resolve_table(None, "en"),
        )
    }

    /// Loads `language` and `default_language` from `dir`.
    ///
    /// Never fails: a missing or invalid file falls back to the compiled-in
    /// table for that tag, or to an empty table, with a warning logged.
    pub fn load(dir: &Path, language: &str, default_language: &str) -> Self {
        let locales = Self::new(
            language,
            resolve_table(Some(dir), language),
            default_language,
            resolve_table(Some(dir), default_language),
        );
        tracing::info!(
            active = language,
            default = default_language,
            keys = locales.active.len(),
            "locales loaded"
        );
        locales
    }

    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Looks up `key` in the active table, then the default table.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingLocaleKey`] if neither table has the key.
    pub fn lookup(&self, key: &str) -> CoreResult<&str> {
        self.active
            .get(key)
            .or_else(|| self.default.get(key))
            .map(String::as_str)
            .ok_or_else(|| CoreError::MissingLocaleKey(key.to_string()))
    }

    /// Translates `key`, degrading to the key itself when it is unknown.
    pub fn t<'s>(&'s self, key: &'s str) -> &'s str {
        self.t_or(key, key)
    }

    /// Translates `key`, degrading to `fallback` when it is unknown.
    pub fn t_or<'s>(&'s self, key: &str, fallback: &'s str) -> &'s str {
        match self.lookup(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "using fallback text");
                fallback
            }
        }
    }

    /// Translates `key` and substitutes `{name}` placeholders from `args`.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Display label for a catalog category (`cat_<name>`), or the name itself.
    pub fn category_label<'s>(&'s self, name: &'s str) -> &'s str {
        self.t_or(&format!("cat_{name}"), name)
    }
}

fn resolve_table(dir: Option<&Path>, tag: &str) -> LocaleTable {
    if let Some(dir) = dir {
        let path = dir.join(format!("{tag}.json"));
        match load_table(&path) {
            Ok(table) => return table,
            Err(CoreError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "no locale file, trying built-in table");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not load locale file");
            }
        }
    }
    builtin_table(tag).unwrap_or_else(|| {
        tracing::warn!(tag, "no locale table for language");
        LocaleTable::new()
    })
}
