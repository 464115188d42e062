//! Read-only facade over the final merged configuration.

use crate::ConfigValues;
use serde_json::{Map, Value};
use std::ops::Index;

/// The merged configuration an application reads from.
///
/// Wraps exactly one [`ConfigValues`] for the lifetime of the owning
/// process. There is no reload-in-place: to pick up changed files, build a
/// new `Config` and discard this one. The loading constructors live in the
/// loader module; `Config::default()` and [`Config::from_defaults`] cover
/// the directory-less cases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: ConfigValues,
}

impl Config {
    /// Config holding only the provided default values.
    pub fn from_defaults(defaults: Map<String, Value>) -> Self {
        Self {
            values: ConfigValues::new(defaults),
        }
    }

    /// Value stored at a top-level key, `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value stored at a top-level key, or the supplied fallback.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.values.get_or(key, default)
    }

    /// Whether a top-level key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the configuration holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The entire merged mapping, borrowed.
    pub fn as_map(&self) -> &Map<String, Value> {
        self.values.as_map()
    }

    /// The wrapped value container.
    pub fn values(&self) -> &ConfigValues {
        &self.values
    }
}

impl From<ConfigValues> for Config {
    fn from(values: ConfigValues) -> Self {
        Self { values }
    }
}

/// Index sugar with the same miss semantics as the container:
/// `config["key"]` yields `Value::Null` for missing keys.
impl Index<&str> for Config {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.values[key]
    }
}
