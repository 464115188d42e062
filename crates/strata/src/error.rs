//! Error types for config loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading configuration from disk.
///
/// Only required files that cannot be read fail a load; malformed content
/// and missing config directories degrade to empty values instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required config file is missing or is not a regular file.
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },
    /// A required config file exists but reading it failed.
    #[error("failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No driver recognizes the file's extension.
    #[error("no config driver for file: {path}")]
    UnsupportedFormat { path: PathBuf },
}
