//! Directory-based configuration loader.
//!
//! Discovers recognized config files in a directory, pairs each base file
//! with its `.local.` override companion, and folds the stack onto caller
//! defaults to produce a final `Config`.

mod drivers;
mod file;
mod merge;
mod paths;

#[cfg(test)]
mod tests;

pub use drivers::{Json5FileLoader, JsonFileLoader, YamlFileLoader};
pub use file::FileLoader;
pub use paths::local_override_path;

use crate::{Config, ConfigError, ConfigValues};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load every recognized config file in `dir` and merge them.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_defaults(dir, Map::new())
    }

    /// Load `dir` on top of caller-supplied defaults.
    ///
    /// Base files merge onto the defaults in filename order, each one
    /// followed by its `.local.` override when present. Later layers win
    /// per top-level key. A missing or unreadable directory contributes no
    /// layers, so the result is exactly the defaults.
    pub fn load_with_defaults(
        dir: impl AsRef<Path>,
        defaults: Map<String, Value>,
    ) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        debug!("loading layered config (dir={})", dir.display());
        let layers = load_directory(dir)?;
        let layer_count = layers.len();
        let values = merge::fold_layers(ConfigValues::new(defaults), layers);
        info!(
            "layered config loaded (dir={}, layers={})",
            dir.display(),
            layer_count
        );
        Ok(Self::from(values))
    }

    /// Parse a single config file through its driver, skipping discovery
    /// and layering.
    ///
    /// The file is treated as required, so a missing or unreadable path is
    /// an error; readable-but-malformed content still degrades to an empty
    /// mapping. An extension no driver recognizes is
    /// [`ConfigError::UnsupportedFormat`].
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Map<String, Value>, ConfigError> {
        let path = path.as_ref();
        debug!("parsing single config file (path={})", path.display());
        let loader =
            drivers::loader_for(path, true).ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;
        Ok(loader.load()?.into_map())
    }
}

/// Load the directory's config stack in merge order.
fn load_directory(dir: &Path) -> Result<Vec<ConfigValues>, ConfigError> {
    let mut layers = Vec::new();
    for base in discover_base_files(dir) {
        let Some(loader) = drivers::loader_for(&base, true) else {
            continue;
        };
        layers.push(loader.load()?);

        let override_path = local_override_path(&base);
        if override_path.is_file() {
            // Non-required: a deleter racing us between the check and the
            // read downgrades the override to an empty layer.
            if let Some(override_loader) = drivers::loader_for(&override_path, false) {
                layers.push(override_loader.load()?);
            }
        }
    }
    Ok(layers)
}

/// Base config files in `dir`, sorted by filename for a deterministic
/// merge order.
///
/// Only regular files whose extension has a driver count, and `.local.`
/// companions are excluded here; they are loaded right after their base
/// file instead of being layers of their own.
fn discover_base_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!(
            "config dir missing or not a directory (dir={})",
            dir.display()
        );
        return Vec::new();
    }
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "unreadable config dir treated as empty (dir={}, err={})",
                dir.display(),
                err
            );
            return Vec::new();
        }
    };
    let mut bases: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && drivers::recognized(path) && !paths::is_local_override(path)
        })
        .collect();
    bases.sort();
    bases
}
