//! Nodes and the links between them.
//!
//! A node is one level of a prototype chain: it owns a [`PropertyStore`] and
//! optionally points at a parent to which unresolved lookups are delegated.
//! The parent link is non-owning; ownership runs downwards through the
//! `children` list, which only [`Node::add_child`] populates.
//!
//! ```text
//!        one  (children: [two, two'])
//!       /   \
//!     two   two'
//!      :
//!    three   (inherit_from(two): two does not list three)
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ChainConfig;
use crate::ds::error::ChainError;
use crate::ds::property::{PropertyEntry, RawEntry};
use crate::ds::store::PropertyStore;
use crate::ds::value::Value;

pub struct NodeData {
    id: Option<String>,
    uid: String,
    config: ChainConfig,
    store: PropertyStore,
    parent: Option<Weak<RefCell<NodeData>>>,
    children: Vec<Node>,
}

impl NodeData {
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }
}

// Owned subtrees are released from a worklist; the default drop would nest
// one frame per level and overflow on long `add_child` chains.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(child.0) {
                let mut data = cell.into_inner();
                pending.append(&mut data.children);
            }
        }
    }
}

/// Shared handle to a node. Cloning the handle does not copy the node.
///
/// Handles are `!Send`; a node graph belongs to one thread.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    pub fn new() -> Self {
        Node::with_config(None, ChainConfig::default())
    }

    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Node::with_config(Some(id.into()), ChainConfig::default())
    }

    pub fn with_config(id: Option<String>, config: ChainConfig) -> Self {
        Node(Rc::new(RefCell::new(NodeData {
            id,
            uid: Uuid::new_v4().to_hyphenated().to_string(),
            config,
            store: PropertyStore::new(),
            parent: None,
            children: vec![],
        })))
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: Option<String>) {
        self.0.borrow_mut().id = id;
    }

    /// Random diagnostic tag used in log records. Carries no identity.
    pub fn uid(&self) -> String {
        self.0.borrow().uid.to_string()
    }

    pub fn config(&self) -> ChainConfig {
        self.0.borrow().config
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn data(&self) -> Ref<'_, NodeData> {
        self.0.borrow()
    }

    // Own entries

    pub fn set_add<K: Into<String>, V: Into<Value>>(&self, key: K, value: V) {
        self.0.borrow_mut().store.set_add(key.into(), value.into());
    }

    /// Writes a tombstone. The value is kept for raw access only.
    pub fn set_remove<K: Into<String>, V: Into<Value>>(&self, key: K, value: V) {
        self.0.borrow_mut().store.set_remove(key.into(), value.into());
    }

    pub fn set_extend<K, I, V>(&self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.0.borrow_mut().store.set_extend(key.into(), values);
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.0.borrow().store.has_own(key)
    }

    pub fn delete_own(&self, key: &str) -> Result<PropertyEntry, ChainError> {
        let deleted = self.0.borrow_mut().store.delete_own(key);
        deleted.map_err(|_| {
            ChainError::NotFound(format!("{} does not own a property named \"{}\"", self, key))
        })
    }

    pub fn own_keys(&self) -> Vec<String> {
        self.0.borrow().store.own_keys()
    }

    pub fn raw_entries(&self) -> Vec<RawEntry> {
        self.0.borrow().store.raw_entries()
    }

    pub fn own_len(&self) -> usize {
        self.0.borrow().store.len()
    }

    pub(crate) fn clear_own(&self) {
        self.0.borrow_mut().store.clear();
    }

    // Links

    /// The node lookups are delegated to. A parent that has since been
    /// dropped reads as no parent.
    pub fn parent(&self) -> Option<Node> {
        self.0
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(Node)
    }

    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    /// Parent, grandparent and so on, nearest first.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Links `child` below this node and registers it in `children`.
    pub fn add_child(&self, child: &Node) -> Result<(), ChainError> {
        child.check_link(self)?;
        let already_listed = child.parent().map_or(false, |p| p.ptr_eq(self))
            && self.0.borrow().children.iter().any(|c| c.ptr_eq(child));
        child.relink(Some(self));
        if !already_listed {
            self.0.borrow_mut().children.push(child.clone());
        }
        debug!(parent = %self.uid(), child = %child.uid(), "attached owned child");
        Ok(())
    }

    /// Attaches each child in order. Stops at the first rejected link;
    /// children before it stay attached.
    pub fn add_children<'a, I>(&self, children: I) -> Result<(), ChainError>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        for child in children {
            self.add_child(child)?;
        }
        Ok(())
    }

    /// Delegates lookups to `ancestor` without registering in its
    /// `children`, so one ancestor can back many unrelated nodes.
    pub fn inherit_from(&self, ancestor: &Node) -> Result<(), ChainError> {
        self.check_link(ancestor)?;
        self.relink(Some(ancestor));
        debug!(node = %self.uid(), ancestor = %ancestor.uid(), "inherits from ancestor");
        Ok(())
    }

    /// Cuts the parent link.
    pub fn clear_parent(&self) {
        if self.parent().is_some() {
            self.relink(None);
            debug!(node = %self.uid(), "parent link cleared");
        }
    }

    fn check_link(&self, parent: &Node) -> Result<(), ChainError> {
        if parent.ptr_eq(self) || parent.ancestors().any(|a| a.ptr_eq(self)) {
            warn!(node = %self.uid(), parent = %parent.uid(), "rejected link that would create a cycle");
            return Err(ChainError::InvalidArgument(format!(
                "linking {} under {} would create a cycle",
                self, parent
            )));
        }
        let depth = parent.depth() + 1;
        self.config().check(depth).map_err(|e| {
            warn!(node = %self.uid(), parent = %parent.uid(), depth, "rejected link deeper than configured");
            e
        })
    }

    // Points the parent link at `parent`, unregistering from the previous
    // parent's children unless it is the same node.
    fn relink(&self, parent: Option<&Node>) {
        if let Some(previous) = self.parent() {
            let same = parent.map_or(false, |p| p.ptr_eq(&previous));
            if !same {
                previous
                    .0
                    .borrow_mut()
                    .children
                    .retain(|c| !c.ptr_eq(self));
            }
        }
        self.0.borrow_mut().parent = parent.map(|p| Rc::downgrade(&p.0));
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        match &data.id {
            Some(id) => write!(f, "\"{}\"", id),
            None => write!(f, "<{}>", data.uid),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Node")
            .field("id", &data.id)
            .field("uid", &data.uid)
            .field("own_entries", &data.store.len())
            .field("children", &data.children.len())
            .finish()
    }
}

pub struct Ancestors {
    next: Option<Node>,
}

impl Iterator for Ancestors {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
