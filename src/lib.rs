//! # protochain - Prototype-Chain Property Resolution
//!
//! An in-memory object model where every node can:
//! - own values,
//! - inherit values from a linked ancestor,
//! - override an inherited value,
//! - hide an inherited value behind a tombstone,
//! - extend an inherited sequence with its own elements.
//!
//! ## Quick Start
//!
//! ```
//! use protochain::{Node, Value};
//!
//! let one = Node::with_id("one");
//! one.set("foo", "v1");
//! one.set("bar", "v2");
//! one.set("baz", Value::sequence(vec!["a", "b"]));
//!
//! let two = Node::with_id("two");
//! one.add_child(&two).unwrap();
//!
//! // inherited
//! assert_eq!(two.get("foo").unwrap(), Value::from("v1"));
//! assert!(!two.has_own("foo"));
//!
//! // overridden
//! two.set("bar", "v3");
//! assert_eq!(two.get("bar").unwrap(), Value::from("v3"));
//! assert_eq!(one.get("bar").unwrap(), Value::from("v2"));
//!
//! // extended
//! two.set_extend("baz", vec!["c", "d"]);
//! assert_eq!(two.get("baz").unwrap(), Value::sequence(vec!["a", "b", "c", "d"]));
//!
//! // removed
//! two.remove("foo");
//! assert!(two.get("foo").unwrap_err().is_not_found());
//! assert_eq!(two.keys().unwrap(), vec!["bar", "baz"]);
//! ```
//!
//! ## Resolution
//!
//! Looking up a key scans from the node towards its ancestors and stops at
//! the first node that owns the key. That node's action decides:
//!
//! ```text
//! three  baz: Extend [x]        -> [a, b, 2, 3, 4, x]
//!   |
//! two    baz: Extend [2, 3, 4]  -> [a, b, 2, 3, 4]
//!   |
//! one    baz: Add [a, b]        -> [a, b]
//! ```
//!
//! ## Links
//!
//! [`Node::add_child`] sets the child's parent and records the child in the
//! parent's `children`. [`Node::inherit_from`] only sets the parent, so many
//! unrelated nodes can share one ancestor without that ancestor tracking
//! them. Both reject links that would make a node its own ancestor.
//!
//! ## Architecture
//!
//! - **[`ds`]** - Values, own stores, nodes, and the chain operations
//!   - **[`ds::operations::resolve`]** - Resolution engine
//!   - **[`ds::operations::view`]** - Effective keys, values and bounded copy
//!   - **[`ds::container`]** - Keyed-collection surface on [`Node`]
//! - **[`access`]** - Member access, change observers, prototype objects
//! - **[`config`]** - Chain depth limits

pub mod access;
pub mod config;
pub mod ds;

pub use config::ChainConfig;
pub use ds::error::ChainError;
pub use ds::node::Node;
pub use ds::property::{PropertyAction, PropertyEntry, RawEntry};
pub use ds::value::{NumberType, Value};
