use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::value::Value;

/// Name-based access to members, the capability a dynamic-access layer
/// needs from whatever stores its members.
pub trait MemberAccess {
    fn get_member(&self, name: &str) -> Result<Value, ChainError>;

    fn set_member(&self, name: &str, value: Value);

    fn try_get_member(&self, name: &str) -> Result<Option<Value>, ChainError> {
        match self.get_member(name) {
            Ok(value) => Ok(Some(value)),
            Err(ChainError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn has_member(&self, name: &str) -> Result<bool, ChainError> {
        Ok(self.try_get_member(name)?.is_some())
    }
}

impl MemberAccess for Node {
    fn get_member(&self, name: &str) -> Result<Value, ChainError> {
        self.get(name)
    }

    fn set_member(&self, name: &str, value: Value) {
        self.set(name, value);
    }

    fn try_get_member(&self, name: &str) -> Result<Option<Value>, ChainError> {
        self.try_get(name)
    }
}
