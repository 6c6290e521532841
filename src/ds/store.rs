//! Per-node own entries.
//!
//! The store keeps keys in insertion order so that enumeration of a node's
//! effective properties is reproducible. Overwriting a key keeps its
//! original position; deleting it closes the gap.

use indexmap::IndexMap;

use crate::ds::error::ChainError;
use crate::ds::property::{PropertyEntry, RawEntry};
use crate::ds::value::Value;

#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    entries: IndexMap<String, PropertyEntry>,
}

impl PropertyStore {
    pub fn new() -> Self {
        PropertyStore {
            entries: IndexMap::new(),
        }
    }

    pub fn set_add(&mut self, key: String, value: Value) {
        self.entries.insert(key, PropertyEntry::add(value));
    }

    pub fn set_remove(&mut self, key: String, value: Value) {
        self.entries.insert(key, PropertyEntry::remove(value));
    }

    pub fn set_extend(&mut self, key: String, values: Vec<Value>) {
        self.entries.insert(key, PropertyEntry::extend(values));
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get_own(&self, key: &str) -> Option<&PropertyEntry> {
        self.entries.get(key)
    }

    /// Erases the entry outright; this is not a tombstone.
    pub fn delete_own(&mut self, key: &str) -> Result<PropertyEntry, ChainError> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| ChainError::NotFound(format!("no owned property named \"{}\"", key)))
    }

    pub fn own_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn raw_entries(&self) -> Vec<RawEntry> {
        self.entries
            .iter()
            .map(|(key, entry)| RawEntry {
                key: key.to_string(),
                action: entry.action,
                value: entry.value.clone(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
