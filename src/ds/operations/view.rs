//! The aggregated view of a node: its effective keys and values.
//!
//! Keys are collected level by level, the node's own keys first in insertion
//! order and then each ancestor's. Whether a key is visible is always decided
//! by resolving it from the starting node, never from the level it was found
//! at, so a tombstone half way up hides the key even though a more distant
//! ancestor still defines it. The first level at which a key shows up
//! classifies it; later occurrences are skipped.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::operations::resolve::{resolve, try_resolve};
use crate::ds::value::Value;

pub fn effective_keys(node: &Node) -> Result<Vec<String>, ChainError> {
    let mut removed: HashSet<String> = HashSet::new();
    let mut keys: IndexSet<String> = IndexSet::new();
    let mut current = Some(node.clone());
    while let Some(level) = current {
        for key in level.own_keys() {
            if removed.contains(&key) || keys.contains(&key) {
                continue;
            }
            if try_resolve(node, &key)?.is_some() {
                keys.insert(key);
            } else {
                removed.insert(key);
            }
        }
        current = level.parent();
    }
    Ok(keys.into_iter().collect())
}

pub fn effective_entries(node: &Node) -> Result<Vec<(String, Value)>, ChainError> {
    effective_keys(node)?
        .into_iter()
        .map(|key| {
            let value = resolve(node, &key)?;
            Ok((key, value))
        })
        .collect()
}

pub fn effective_values(node: &Node) -> Result<Vec<Value>, ChainError> {
    Ok(effective_entries(node)?
        .into_iter()
        .map(|(_, value)| value)
        .collect())
}

pub fn effective_count(node: &Node) -> Result<usize, ChainError> {
    Ok(effective_keys(node)?.len())
}

/// Writes the effective entries into `buffer` starting at `offset`.
///
/// Capacity is checked before the first write, so a failing call leaves the
/// buffer as it was. Slots outside the written range are never touched.
/// Returns the number of entries written.
pub fn copy_into(
    node: &Node,
    buffer: Option<&mut [Option<(String, Value)>]>,
    offset: isize,
) -> Result<usize, ChainError> {
    let buffer = buffer.ok_or_else(|| {
        ChainError::InvalidArgument("the destination buffer must be present".to_string())
    })?;
    if offset < 0 {
        return Err(ChainError::InvalidRange(
            "the offset must be zero or greater".to_string(),
        ));
    }
    let offset = offset as usize;
    let entries = effective_entries(node)?;
    if offset > buffer.len() || entries.len() > buffer.len() - offset {
        return Err(ChainError::InvalidRange(format!(
            "the destination buffer does not have room for {} entries at offset {}",
            entries.len(),
            offset
        )));
    }
    let written = entries.len();
    for (slot, entry) in buffer[offset..].iter_mut().zip(entries) {
        *slot = Some(entry);
    }
    Ok(written)
}
