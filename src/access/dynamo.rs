//! Member access with change notification.
//!
//! A [`Dynamo`] forwards every read and write to its member provider and
//! tells registered observers which member changed. A write counts as a
//! change when the member was absent before or held a different value.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use protochain::access::Dynamo;
//!
//! let seen = Rc::new(RefCell::new(vec![]));
//! let log = seen.clone();
//!
//! let mut thing = Dynamo::new();
//! thing.observe(move |name: &str| log.borrow_mut().push(name.to_string()));
//! thing.set("prop1", "I'm property one").unwrap();
//! thing.set("prop1", "I'm property one").unwrap();
//!
//! assert_eq!(*seen.borrow(), vec!["prop1".to_string()]);
//! ```

use tracing::trace;

use crate::ds::error::ChainError;
use crate::ds::node::Node;
use crate::ds::operations::comparison::same_value;
use crate::ds::value::Value;
use crate::access::member::MemberAccess;

/// Callback invoked with the name of a member whose value changed.
pub trait ChangeObserver {
    fn member_changed(&self, name: &str);
}

impl<F: Fn(&str)> ChangeObserver for F {
    fn member_changed(&self, name: &str) {
        self(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub struct Dynamo<P: MemberAccess = Node> {
    id: Option<String>,
    provider: P,
    observers: Vec<(ObserverId, Box<dyn ChangeObserver>)>,
    next_observer: u64,
}

impl Dynamo<Node> {
    pub fn new() -> Self {
        Dynamo::with_provider(Node::new())
    }

    pub fn with_id<S: Into<String>>(id: S) -> Self {
        let id = id.into();
        let mut dynamo = Dynamo::with_provider(Node::with_id(id.clone()));
        dynamo.id = Some(id);
        dynamo
    }
}

impl Default for Dynamo<Node> {
    fn default() -> Self {
        Dynamo::new()
    }
}

impl<P: MemberAccess> Dynamo<P> {
    pub fn with_provider(provider: P) -> Self {
        Dynamo {
            id: None,
            provider,
            observers: vec![],
            next_observer: 0,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn get(&self, name: &str) -> Result<Value, ChainError> {
        self.provider.get_member(name)
    }

    pub fn try_get(&self, name: &str) -> Result<Option<Value>, ChainError> {
        self.provider.try_get_member(name)
    }

    pub fn has(&self, name: &str) -> Result<bool, ChainError> {
        self.provider.has_member(name)
    }

    /// Writes `value` and notifies observers if the member changed.
    /// Returns whether a notification went out.
    pub fn set<V: Into<Value>>(&self, name: &str, value: V) -> Result<bool, ChainError> {
        let value = value.into();
        let changed = match self.provider.try_get_member(name)? {
            Some(previous) => !same_value(&previous, &value),
            None => true,
        };
        self.provider.set_member(name, value);
        if changed {
            trace!(member = name, observers = self.observers.len(), "member changed");
            for (_, observer) in &self.observers {
                observer.member_changed(name);
            }
        }
        Ok(changed)
    }

    pub fn observe<O: ChangeObserver + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }
}
