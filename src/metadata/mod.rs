//! Page metadata records
//!
//! This module contains the metadata record type shared by every page:
//! - `MetadataRecord` - string-keyed mapping of YAML values
//! - `is_blank` - the blankness policy for metadata values
//! - Front matter splitting and parsing (see [`front_matter`])

pub mod front_matter;

pub use front_matter::FrontMatter;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::{self, Result};

/// Metadata key naming the template that wraps a page's rendered content
pub const LAYOUT_KEY: &str = "layout";

/// Layout value assigned to pages whose front matter does not name one
pub const DEFAULT_LAYOUT: &str = "default";

/// The metadata record of a single page
///
/// A mapping from string keys to YAML values, populated from the page's
/// front matter and mutated in place by metadata hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    entries: BTreeMap<String, Value>,
}

impl MetadataRecord {
    /// Create an empty metadata record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a parsed YAML mapping
    ///
    /// # Errors
    ///
    /// Returns `PagemetaError::NonStringKey` if the mapping contains a key
    /// that is not a YAML string. Front matter is a string-keyed mapping by
    /// definition; anything else is an authoring error in the source file.
    pub fn from_mapping(mapping: serde_yaml::Mapping, path: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (key, value) in mapping {
            match key {
                Value::String(key) => {
                    entries.insert(key, value);
                }
                other => return Err(error::non_string_key(path, describe_value(&other))),
            }
        }
        Ok(Self { entries })
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a value by key as a string slice, if it is a YAML string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Set a value, returning the previous value if the key was present
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Whether the record contains the given key
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Whether a metadata value counts as "not set"
///
/// Blank values are YAML `null`, the boolean `false`, and strings that are
/// empty after trimming. Collections are never blank, even when empty.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Short human-readable name for a YAML value's kind
pub(crate) fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
