//! Concrete config file drivers and extension dispatch.

use super::file::FileLoader;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Top-level entry a JSON5 config document assigns its mapping to.
pub(crate) const CONFIG_KEY: &str = "config";

/// Pick the loader whose format matches the file's extension, if any.
pub(crate) fn loader_for(path: &Path, required: bool) -> Option<Box<dyn FileLoader>> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json5" => Some(Box::new(Json5FileLoader::new(path, required))),
        "json" => Some(Box::new(JsonFileLoader::new(path, required))),
        "yaml" | "yml" => Some(Box::new(YamlFileLoader::new(path, required))),
        _ => None,
    }
}

/// Whether any driver recognizes the file's extension.
pub(crate) fn recognized(path: &Path) -> bool {
    loader_for(path, false).is_some()
}

/// JSON5 driver: the document's top-level `config` entry holds the mapping.
///
/// Files read like lightweight scripts (comments, unquoted keys, trailing
/// commas) but stay declarative. Any top-level entry other than `config` is
/// ignored, and a document without the entry, like one that does not parse
/// at all, contributes nothing rather than failing.
#[derive(Debug)]
pub struct Json5FileLoader {
    path: PathBuf,
    required: bool,
}

impl Json5FileLoader {
    /// Driver for `path`; `required` selects the missing-file policy.
    pub fn new(path: impl Into<PathBuf>, required: bool) -> Self {
        Self {
            path: path.into(),
            required,
        }
    }
}

impl FileLoader for Json5FileLoader {
    fn path(&self) -> &Path {
        &self.path
    }

    fn required(&self) -> bool {
        self.required
    }

    fn parse(&self, raw: &str) -> Option<Map<String, Value>> {
        let document: Value = match json5::from_str(raw) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    "unparseable config file treated as empty (path={}, err={})",
                    self.path.display(),
                    err
                );
                return None;
            }
        };
        let Value::Object(mut entries) = document else {
            debug!(
                "config document is not an object (path={})",
                self.path.display()
            );
            return None;
        };
        match entries.remove(CONFIG_KEY) {
            Some(Value::Object(values)) => Some(values),
            Some(_) => {
                debug!(
                    "`{CONFIG_KEY}` entry is not a mapping (path={})",
                    self.path.display()
                );
                None
            }
            None => {
                debug!(
                    "no `{CONFIG_KEY}` entry in config file (path={})",
                    self.path.display()
                );
                None
            }
        }
    }
}

/// JSON driver: the document root object is the mapping.
#[derive(Debug)]
pub struct JsonFileLoader {
    path: PathBuf,
    required: bool,
}

impl JsonFileLoader {
    /// Driver for `path`; `required` selects the missing-file policy.
    pub fn new(path: impl Into<PathBuf>, required: bool) -> Self {
        Self {
            path: path.into(),
            required,
        }
    }
}

impl FileLoader for JsonFileLoader {
    fn path(&self) -> &Path {
        &self.path
    }

    fn required(&self) -> bool {
        self.required
    }

    fn parse(&self, raw: &str) -> Option<Map<String, Value>> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(values)) => Some(values),
            Ok(_) => {
                debug!(
                    "config document is not an object (path={})",
                    self.path.display()
                );
                None
            }
            Err(err) => {
                warn!(
                    "unparseable config file treated as empty (path={}, err={})",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }
}

/// YAML driver, covering both `.yaml` and `.yml`: the document root
/// mapping is the mapping.
#[derive(Debug)]
pub struct YamlFileLoader {
    path: PathBuf,
    required: bool,
}

impl YamlFileLoader {
    /// Driver for `path`; `required` selects the missing-file policy.
    pub fn new(path: impl Into<PathBuf>, required: bool) -> Self {
        Self {
            path: path.into(),
            required,
        }
    }
}

impl FileLoader for YamlFileLoader {
    fn path(&self) -> &Path {
        &self.path
    }

    fn required(&self) -> bool {
        self.required
    }

    fn parse(&self, raw: &str) -> Option<Map<String, Value>> {
        match serde_yaml::from_str::<Value>(raw) {
            Ok(Value::Object(values)) => Some(values),
            Ok(_) => {
                debug!(
                    "config document is not a mapping (path={})",
                    self.path.display()
                );
                None
            }
            Err(err) => {
                warn!(
                    "unparseable config file treated as empty (path={}, err={})",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }
}
