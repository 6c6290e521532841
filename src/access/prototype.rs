//! Prototype-style objects.
//!
//! Each [`Prototype`] owns a fresh node behind a [`Dynamo`] and optionally
//! designates another prototype to inherit from. The link is made with
//! `inherit_from`, so a widely shared prototype does not collect every
//! object built on it in its `children`.

use crate::access::dynamo::Dynamo;
use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::value::Value;

pub struct Prototype {
    dynamo: Dynamo<Node>,
    // Keeps the prototype designated through `set_prototype` alive; the
    // node's parent link is weak.
    retained: Option<Node>,
}

impl Prototype {
    pub fn new() -> Self {
        Prototype {
            dynamo: Dynamo::new(),
            retained: None,
        }
    }

    pub fn with_prototype(prototype: &Prototype) -> Result<Self, ChainError> {
        let mut object = Prototype::new();
        object.set_prototype(Some(prototype))?;
        Ok(object)
    }

    /// Re-points this object at `prototype`, or detaches it on `None`.
    pub fn set_prototype(&mut self, prototype: Option<&Prototype>) -> Result<(), ChainError> {
        match prototype {
            Some(p) => {
                self.node().inherit_from(p.node())?;
                self.retained = Some(p.node().clone());
            }
            None => {
                self.node().clear_parent();
                self.retained = None;
            }
        }
        Ok(())
    }

    /// The node lookups are currently delegated to. Read from the parent
    /// link, so relinking through [`node`](Self::node) is reflected here.
    pub fn prototype(&self) -> Option<Node> {
        self.node().parent()
    }

    pub fn node(&self) -> &Node {
        self.dynamo.provider()
    }

    pub fn dynamo(&self) -> &Dynamo<Node> {
        &self.dynamo
    }

    pub fn dynamo_mut(&mut self) -> &mut Dynamo<Node> {
        &mut self.dynamo
    }

    pub fn get(&self, name: &str) -> Result<Value, ChainError> {
        self.dynamo.get(name)
    }

    pub fn set<V: Into<Value>>(&self, name: &str, value: V) -> Result<bool, ChainError> {
        self.dynamo.set(name, value)
    }

    pub fn has_own_property(&self, name: &str) -> bool {
        self.node().has_own(name)
    }
}

impl Default for Prototype {
    fn default() -> Self {
        Prototype::new()
    }
}
