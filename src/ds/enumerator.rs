//! Restartable enumeration of a node's `(key, value)` pairs.
//!
//! Entries are gathered from the chain when the enumerator is created and
//! again on every [`Entries::reset`], so each pass reflects the contents of
//! the chain at the moment it began.

use std::vec::IntoIter;

use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::operations::resolve::try_resolve;
use crate::ds::operations::view::effective_entries;
use crate::ds::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every effective key, own and inherited.
    Chain,
    /// Only keys the node owns, skipping its own tombstones.
    Own,
}

pub struct Entries {
    node: Node,
    scope: Scope,
    pending: IntoIter<(String, Value)>,
}

impl Entries {
    pub fn new(node: &Node, scope: Scope) -> Result<Self, ChainError> {
        let pending = gather(node, scope)?.into_iter();
        Ok(Entries {
            node: node.clone(),
            scope,
            pending,
        })
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Starts over from the current contents of the chain.
    pub fn reset(&mut self) -> Result<(), ChainError> {
        self.pending = gather(&self.node, self.scope)?.into_iter();
        Ok(())
    }
}

fn gather(node: &Node, scope: Scope) -> Result<Vec<(String, Value)>, ChainError> {
    match scope {
        Scope::Chain => effective_entries(node),
        Scope::Own => {
            let mut entries = vec![];
            for key in node.own_keys() {
                if let Some(value) = try_resolve(node, &key)? {
                    entries.push((key, value));
                }
            }
            Ok(entries)
        }
    }
}

impl Iterator for Entries {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pending.size_hint()
    }
}

impl ExactSizeIterator for Entries {}
