use std::fmt;
use std::fmt::{Display, Formatter};

use crate::ds::value::Value;

/// What a node does with a key relative to its parent.
///
/// `Add` is both "add" and "override", `Remove` hides an inherited key, and
/// `Extend` unions the inherited sequence with the node's own one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyAction {
    Add,
    Remove,
    Extend,
}

impl Display for PropertyAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyAction::Add => write!(f, "add"),
            PropertyAction::Remove => write!(f, "remove"),
            PropertyAction::Extend => write!(f, "extend"),
        }
    }
}

/// A raw own entry: the action together with the stored value. Tombstones
/// keep whatever value they were written with.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub action: PropertyAction,
    pub value: Value,
}

impl PropertyEntry {
    pub fn add(value: Value) -> Self {
        PropertyEntry {
            action: PropertyAction::Add,
            value,
        }
    }

    pub fn remove(value: Value) -> Self {
        PropertyEntry {
            action: PropertyAction::Remove,
            value,
        }
    }

    pub fn extend(values: Vec<Value>) -> Self {
        PropertyEntry {
            action: PropertyAction::Extend,
            value: Value::Sequence(values),
        }
    }

    pub fn is_tombstone(&self) -> bool {
        self.action == PropertyAction::Remove
    }
}

/// An own entry as handed out by `raw_entries`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub key: String,
    pub action: PropertyAction,
    pub value: Value,
}
