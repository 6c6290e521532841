//! Keyed-collection surface over a node.
//!
//! Reads go through the resolution engine, so they see inherited values.
//! Writes only ever touch the node's own store: there is no way to reach an
//! ancestor's storage from here.

use crate::ds::enumerator::{Entries, Scope};
use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::operations::comparison::same_value;
use crate::ds::operations::resolve::{ancestor_tuple, own_tuple, resolve, try_resolve};
use crate::ds::operations::view::{
    copy_into, effective_count, effective_entries, effective_keys, effective_values,
};
use crate::ds::property::PropertyEntry;
use crate::ds::value::Value;

impl Node {
    pub fn get(&self, key: &str) -> Result<Value, ChainError> {
        resolve(self, key)
    }

    pub fn try_get(&self, key: &str) -> Result<Option<Value>, ChainError> {
        try_resolve(self, key)
    }

    /// Plain writes always add or override.
    pub fn set<K: Into<String>, V: Into<Value>>(&self, key: K, value: V) {
        self.set_add(key, value);
    }

    /// Same as [`set`](Self::set); an existing key is overwritten.
    pub fn add<K: Into<String>, V: Into<Value>>(&self, key: K, value: V) {
        self.set_add(key, value);
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, ChainError> {
        Ok(try_resolve(self, key)?.is_some())
    }

    /// True when `key` resolves here to a value equal to `value`.
    pub fn contains(&self, key: &str, value: &Value) -> Result<bool, ChainError> {
        Ok(match try_resolve(self, key)? {
            Some(resolved) => same_value(&resolved, value),
            None => false,
        })
    }

    /// Hides `key` from this node outward by writing an own tombstone.
    /// Ancestors keep their entries.
    pub fn remove(&self, key: &str) -> bool {
        self.set_remove(key, Value::Null);
        true
    }

    /// Tombstones `key`, keeping `value` on the tombstone for raw access.
    pub fn remove_entry<V: Into<Value>>(&self, key: &str, value: V) -> bool {
        self.set_remove(key, value);
        true
    }

    /// Drops every own entry. Ancestors are left alone.
    pub fn clear(&self) {
        self.clear_own();
    }

    pub fn keys(&self) -> Result<Vec<String>, ChainError> {
        effective_keys(self)
    }

    pub fn values(&self) -> Result<Vec<Value>, ChainError> {
        effective_values(self)
    }

    pub fn entries(&self) -> Result<Vec<(String, Value)>, ChainError> {
        effective_entries(self)
    }

    pub fn count(&self) -> Result<usize, ChainError> {
        effective_count(self)
    }

    pub fn is_empty(&self) -> Result<bool, ChainError> {
        Ok(self.count()? == 0)
    }

    pub fn copy_into(
        &self,
        buffer: Option<&mut [Option<(String, Value)>]>,
        offset: isize,
    ) -> Result<usize, ChainError> {
        copy_into(self, buffer, offset)
    }

    pub fn iter(&self) -> Result<Entries, ChainError> {
        Entries::new(self, Scope::Chain)
    }

    pub fn iter_own(&self) -> Result<Entries, ChainError> {
        Entries::new(self, Scope::Own)
    }

    pub fn own_tuple(&self, key: &str) -> Result<PropertyEntry, ChainError> {
        own_tuple(self, key)
    }

    pub fn ancestor_tuple(&self, key: &str) -> Result<PropertyEntry, ChainError> {
        ancestor_tuple(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_uses_resolved_value() {
        let one = Node::new();
        let two = Node::new();
        one.set("foo", "v1");
        two.inherit_from(&one).unwrap();
        assert!(two.contains("foo", &Value::from("v1")).unwrap());
        assert!(!two.contains("foo", &Value::from("v2")).unwrap());
        assert!(!two.contains("nope", &Value::Null).unwrap());
    }

    #[test]
    fn test_clear_keeps_parent() {
        let one = Node::new();
        let two = Node::new();
        one.set("foo", "v1");
        two.inherit_from(&one).unwrap();
        two.set("foo", "mine");
        two.set("bar", "mine too");
        two.clear();
        assert_eq!(two.own_len(), 0);
        assert_eq!(two.get("foo").unwrap(), Value::from("v1"));
        assert_eq!(one.own_len(), 1);
    }

    #[test]
    fn test_remove_entry_keeps_value_on_tombstone() {
        let one = Node::new();
        let two = Node::new();
        one.set("bar", "bar value");
        two.inherit_from(&one).unwrap();
        assert!(two.remove_entry("bar", "two's bar value"));
        assert!(!two.contains_key("bar").unwrap());
        assert_eq!(two.own_tuple("bar").unwrap().value, Value::from("two's bar value"));
        assert!(!two.values().unwrap().contains(&Value::from("two's bar value")));
    }
}
