//! Resolution of a key against a node.
//!
//! The first node that owns the key, scanning from the starting node
//! upwards, decides the outcome:
//!
//! - `Add` returns the stored value.
//! - `Remove` fails with `NotFound`, however many ancestors define the key.
//! - `Extend` returns the ancestor's effective sequence followed by the own
//!   elements it does not already contain. The union is rebuilt on every call.
//!
//! Both delegation and the extend union walk the chain iteratively, so
//! lookups use constant stack however long the chain grows.

use tracing::trace;

use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::operations::comparison::union_into;
use crate::ds::property::{PropertyAction, PropertyEntry};
use crate::ds::value::Value;

// The first node owning `key`, starting at `node` itself.
fn find_owner(node: &Node, key: &str) -> Option<(Node, PropertyEntry)> {
    let mut current = Some(node.clone());
    while let Some(level) = current {
        let entry = level.data().store().get_own(key).cloned();
        if let Some(entry) = entry {
            return Some((level, entry));
        }
        current = level.parent();
    }
    None
}

pub fn resolve(node: &Node, key: &str) -> Result<Value, ChainError> {
    let (owner, entry) = match find_owner(node, key) {
        Some(found) => found,
        None => {
            trace!(node = %node.uid(), key, "no node in the chain owns the key");
            return Err(ChainError::NotFound(format!(
                "{} and its ancestors do not have a property named \"{}\"",
                node, key
            )));
        }
    };
    match entry.action {
        PropertyAction::Add => Ok(entry.value),
        PropertyAction::Remove => {
            trace!(node = %node.uid(), owner = %owner.uid(), key, "key hidden by tombstone");
            Err(ChainError::NotFound(format!(
                "{} has removed the property named \"{}\"",
                owner, key
            )))
        }
        PropertyAction::Extend => Ok(extend_union(owner, key, entry.value)),
    }
}

/// Non-failing lookup. Only `NotFound` becomes `None`; anything else still
/// propagates.
pub fn try_resolve(node: &Node, key: &str) -> Result<Option<Value>, ChainError> {
    match resolve(node, key) {
        Ok(value) => Ok(Some(value)),
        Err(ChainError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

// Collects the own sequence of every extending owner above `owner` until an
// `Add`, a tombstone or the root ends the run, then folds the unions from
// the base downwards.
fn extend_union(owner: Node, key: &str, own: Value) -> Value {
    let mut layers = vec![own];
    let mut next = owner.parent();
    let mut merged = vec![];
    while let Some(level) = next {
        match find_owner(&level, key) {
            Some((found, entry)) => match entry.action {
                PropertyAction::Add => {
                    merged = entry.value.into_elements();
                    break;
                }
                PropertyAction::Remove => break,
                PropertyAction::Extend => {
                    layers.push(entry.value);
                    next = found.parent();
                }
            },
            None => break,
        }
    }
    for layer in layers.into_iter().rev() {
        union_into(&mut merged, layer.into_elements());
    }
    Value::Sequence(merged)
}

/// The node's own entry for `key`, tombstones included.
pub fn own_tuple(node: &Node, key: &str) -> Result<PropertyEntry, ChainError> {
    let entry = node.data().store().get_own(key).cloned();
    entry.ok_or_else(|| {
        ChainError::NotFound(format!("{} does not own a property named \"{}\"", node, key))
    })
}

/// The raw entry of the nearest ancestor owning `key`, skipping the node.
pub fn ancestor_tuple(node: &Node, key: &str) -> Result<PropertyEntry, ChainError> {
    match node.parent() {
        Some(parent) => property_tuple(&parent, key),
        None => Err(ChainError::NotFound(format!(
            "{} and its ancestors do not have a property named \"{}\"",
            node, key
        ))),
    }
}

/// The raw entry that decides resolution of `key` at `node`.
pub fn property_tuple(node: &Node, key: &str) -> Result<PropertyEntry, ChainError> {
    match find_owner(node, key) {
        Some((_, entry)) => Ok(entry),
        None => Err(ChainError::NotFound(format!(
            "{} and its ancestors do not have a property named \"{}\"",
            node, key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(value: &Value) -> Vec<String> {
        value
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn test_own_add_wins() {
        let one = Node::with_id("one");
        let two = Node::with_id("two");
        one.set_add("bar", "v2");
        two.inherit_from(&one).unwrap();
        two.set_add("bar", "v3");
        assert_eq!(resolve(&two, "bar").unwrap(), Value::from("v3"));
        assert_eq!(resolve(&one, "bar").unwrap(), Value::from("v2"));
    }

    #[test]
    fn test_missing_everywhere() {
        let one = Node::with_id("one");
        let err = resolve(&one, "nope").unwrap_err();
        assert_eq!(
            err,
            ChainError::NotFound(
                "\"one\" and its ancestors do not have a property named \"nope\"".to_string()
            )
        );
        assert_eq!(try_resolve(&one, "nope").unwrap(), None);
    }

    #[test]
    fn test_tombstone_hides_ancestor() {
        let one = Node::with_id("one");
        let two = Node::with_id("two");
        one.set_add("bar", "v2");
        two.inherit_from(&one).unwrap();
        two.set_remove("bar", "ignored");
        assert!(resolve(&two, "bar").unwrap_err().is_not_found());
        assert_eq!(own_tuple(&two, "bar").unwrap().value, Value::from("ignored"));
        assert_eq!(ancestor_tuple(&two, "bar").unwrap().value, Value::from("v2"));
    }

    #[test]
    fn test_extend_without_ancestor_value() {
        let one = Node::new();
        let two = Node::new();
        two.inherit_from(&one).unwrap();
        two.set_extend("baz", vec!["c", "d"]);
        assert_eq!(strings(&resolve(&two, "baz").unwrap()), vec!["c", "d"]);
    }

    #[test]
    fn test_extend_scalar_ancestor() {
        let one = Node::new();
        let two = Node::new();
        one.set_add("tags", "solo");
        two.inherit_from(&one).unwrap();
        two.set_extend("tags", vec!["solo", "more"]);
        assert_eq!(strings(&resolve(&two, "tags").unwrap()), vec!["solo", "more"]);
    }

    #[test]
    fn test_extend_through_tombstone_starts_empty() {
        let one = Node::new();
        let two = Node::new();
        let three = Node::new();
        one.set_add("baz", Value::sequence(vec!["a"]));
        two.inherit_from(&one).unwrap();
        three.inherit_from(&two).unwrap();
        two.set_remove("baz", Value::Null);
        three.set_extend("baz", vec!["x"]);
        assert_eq!(strings(&resolve(&three, "baz").unwrap()), vec!["x"]);
    }

    #[test]
    fn test_long_extend_chain() {
        let root = Node::new();
        root.set_add("tags", Value::sequence(vec!["root"]));
        let mut chain = vec![root];
        for level in 0..5_000 {
            let node = Node::new();
            node.inherit_from(&chain[chain.len() - 1]).unwrap();
            if level == 4_000 {
                node.set_extend("tags", vec!["deep"]);
            } else {
                node.set_extend("tags", Vec::<Value>::new());
            }
            chain.push(node);
        }
        let leaf = &chain[chain.len() - 1];
        assert_eq!(strings(&resolve(leaf, "tags").unwrap()), vec!["root", "deep"]);
    }

    #[test]
    fn test_extend_is_not_cached() {
        let one = Node::new();
        let two = Node::new();
        one.set_add("baz", Value::sequence(vec!["a"]));
        two.inherit_from(&one).unwrap();
        two.set_extend("baz", vec!["b"]);
        assert_eq!(strings(&resolve(&two, "baz").unwrap()), vec!["a", "b"]);
        one.set_add("baz", Value::sequence(vec!["z"]));
        assert_eq!(strings(&resolve(&two, "baz").unwrap()), vec!["z", "b"]);
    }
}
