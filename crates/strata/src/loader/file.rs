//! File loading contract shared by all config drivers.

use crate::{ConfigError, ConfigValues};
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Loads one config file into a [`ConfigValues`].
///
/// Implementations supply only the parse step; the readability and
/// tolerance policy is the provided [`load`](FileLoader::load). A required
/// loader fails when its file cannot be read, a non-required loader
/// degrades to an empty container, and readable content that parses to
/// nothing usable degrades to an empty container for both.
pub trait FileLoader {
    /// Path of the backing file.
    fn path(&self) -> &Path;

    /// Whether the backing file must exist and be readable.
    fn required(&self) -> bool;

    /// Parse raw file contents into a mapping, `None` when the contents
    /// yield nothing usable.
    fn parse(&self, raw: &str) -> Option<Map<String, Value>>;

    /// Load the backing file into a complete container, or fail.
    fn load(&self) -> Result<ConfigValues, ConfigError> {
        let path = self.path();
        if !path.is_file() {
            if self.required() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!("optional config file missing (path={})", path.display());
            return Ok(ConfigValues::empty());
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if self.required() => {
                return Err(ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                debug!(
                    "optional config file unreadable (path={}, err={})",
                    path.display(),
                    err
                );
                return Ok(ConfigValues::empty());
            }
        };

        match self.parse(&raw) {
            Some(values) => Ok(ConfigValues::new(values)),
            None => Ok(ConfigValues::empty()),
        }
    }
}
