//! Immutable value container produced by file loads and merges.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Index;

static NULL: Value = Value::Null;

/// An ordered, read-only mapping from top-level key to value.
///
/// Values are opaque to the container: scalars, sequences, and nested
/// mappings pass through untouched. There is no mutating method; merging
/// two containers produces a third, so every `ConfigValues` observed by a
/// caller keeps the content it was constructed with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValues {
    values: Map<String, Value>,
}

impl ConfigValues {
    /// Wrap a raw mapping verbatim. No validation, no coercion.
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Container holding no values.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value stored at a top-level key, `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value stored at a top-level key, or the supplied fallback.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.values.get(key).unwrap_or(default)
    }

    /// Whether a top-level key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the container holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The entire mapping, borrowed.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// The entire mapping, consuming the container.
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    /// Iterate over keys and values in stored order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.values.iter()
    }

    /// Produce a new container where `overlay` wins per top-level key.
    ///
    /// Keys absent from the overlay keep this container's value and their
    /// original position; the merge never descends into nested values.
    pub fn merge(&self, overlay: &ConfigValues) -> ConfigValues {
        let mut merged = self.values.clone();
        for (key, value) in &overlay.values {
            merged.insert(key.clone(), value.clone());
        }
        ConfigValues { values: merged }
    }
}

impl From<Map<String, Value>> for ConfigValues {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a ConfigValues {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Index sugar over [`ConfigValues::get`]: `values["key"]` yields
/// `Value::Null` for missing keys, mirroring how `serde_json::Value`
/// indexes objects.
impl Index<&str> for ConfigValues {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.values.get(key).unwrap_or(&NULL)
    }
}
