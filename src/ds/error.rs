use thiserror::Error;

/// Failures raised by the chain. None of them are transient, so callers
/// should never retry an operation that returned one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The key is absent from the whole chain, sits behind a tombstone, or is
    /// not an own key where one was required.
    #[error("not found: {0}")]
    NotFound(String),
    /// A required argument was missing or would corrupt the chain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A numeric argument fell outside its valid domain.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

impl ChainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChainError::NotFound(_))
    }

    pub fn message(&self) -> &str {
        match self {
            ChainError::NotFound(m) => m,
            ChainError::InvalidArgument(m) => m,
            ChainError::InvalidRange(m) => m,
        }
    }
}
