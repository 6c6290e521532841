//! Chain configuration.
//!
//! Limits how long a node's ancestor chain may grow. The limit is checked
//! when a node is linked to a parent, never during resolution.

use crate::ds::error::ChainError;

/// Configuration carried by each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Maximum number of ancestors the node may have. None means unlimited.
    pub max_depth: Option<usize>,
}

impl ChainConfig {
    /// Create a configuration with no depth limit.
    pub fn unlimited() -> Self {
        ChainConfig { max_depth: None }
    }

    /// Create a configuration allowing at most `max_depth` ancestors.
    pub fn with_limit(max_depth: usize) -> Self {
        ChainConfig {
            max_depth: Some(max_depth),
        }
    }

    /// Check if a chain with `depth` ancestors is allowed.
    pub fn allows(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) => depth <= max,
            None => true,
        }
    }

    /// Like [`allows`](Self::allows) but reports the violation.
    pub fn check(&self, depth: usize) -> Result<(), ChainError> {
        if self.allows(depth) {
            Ok(())
        } else {
            Err(ChainError::InvalidRange(format!(
                "a chain of {} ancestors exceeds the configured maximum of {}",
                depth,
                self.max_depth.unwrap_or_default()
            )))
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::unlimited()
    }
}
