//! Error types for `kaopick-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. Filtering and navigation
//! never fail once a catalog has loaded, so every variant here belongs to
//! either startup (files, parsing) or the export sinks.

use std::path::PathBuf;

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The catalog document does not match the expected schema.
    ///
    /// Fatal at startup: the picker cannot open without a catalog.
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),

    /// A message key is absent from both the active and the default locale.
    #[error("missing locale key: {0}")]
    MissingLocaleKey(String),

    /// An external clipboard or notification command failed.
    #[error("{command} failed: {reason}")]
    Sink {
        /// The program that was invoked.
        command: String,
        /// What went wrong (exit status, timeout, spawn error).
        reason: String,
    },

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `kaopick-core`.
pub type CoreResult<T> = Result<T, CoreError>;
