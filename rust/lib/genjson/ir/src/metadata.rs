//! Declaration metadata.
//!
//! A case-sensitive key/value map attached to every declaration and field.
//! Presence-only tags (e.g. `Serialize`) are stored with an empty value.
//! Enum declarations additionally carry per-value maps keyed by ordinal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known metadata keys.
pub mod keys {
    /// Include the type in serializable discovery.
    pub const SERIALIZE: &str = "Serialize";
    /// Include the type in deserializable discovery.
    pub const DESERIALIZE: &str = "Deserialize";
    /// Naming convention for every field / value of the type.
    pub const RENAME_ALL: &str = "RenameAll";
    /// Explicit wire name of a field, or of an enum value when indexed.
    pub const RENAME: &str = "Rename";
    /// Write the enum as its underlying integer instead of a string.
    pub const AS_NUMBER: &str = "AsNumber";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    entries: BTreeMap<String, String>,

    /// Per-value entries, keyed by the decimal enum value ordinal.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    indexed: BTreeMap<String, BTreeMap<String, String>>,
}

impl MetaData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optional string value for `key`. Flags yield `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present at all, with or without a value.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Optional string value for `key` on the enum value with ordinal `index`.
    pub fn get_indexed(&self, key: &str, index: i64) -> Option<&str> {
        self.indexed
            .get(&index.to_string())
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn insert_indexed(&mut self, key: impl Into<String>, index: i64, value: impl Into<String>) {
        self.indexed
            .entry(index.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_flag(self, key: impl Into<String>) -> Self {
        self.with(key, "")
    }

    pub fn with_indexed(mut self, key: impl Into<String>, index: i64, value: impl Into<String>) -> Self {
        self.insert_indexed(key, index, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.indexed.is_empty()
    }
}
