//! Tests for member access, change observers, prototype objects and chain
//! configuration.

extern crate protochain;

mod chain_util;

use std::cell::RefCell;
use std::rc::Rc;

use chain_util::{init_tracing, joined};
use protochain::access::{Dynamo, MemberAccess, Prototype};
use protochain::{ChainConfig, ChainError, Node, Value};

// ============================================================================
// Dynamo
// ============================================================================

mod dynamo_tests {
    use super::*;

    #[test]
    fn test_dynamo_reads_and_writes_members() {
        init_tracing();
        let thing = Dynamo::new();
        thing.set("prop1", "I'm property one").unwrap();
        thing.set("prop2", "I'm property two").unwrap();
        assert_eq!(thing.get("prop1").unwrap(), Value::from("I'm property one"));
        assert_eq!(thing.get("prop2").unwrap(), Value::from("I'm property two"));
        assert!(thing.has("prop1").unwrap());
        assert!(!thing.has("prop3").unwrap());
        assert_eq!(thing.try_get("prop3").unwrap(), None);
    }

    #[test]
    fn test_every_observer_hears_each_change() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let (f, s) = (first.clone(), second.clone());

        let mut thing = Dynamo::new();
        thing.observe(move |_: &str| *f.borrow_mut() += 1);
        let id = thing.observe(move |_: &str| *s.borrow_mut() += 1);

        thing.set("a", 1).unwrap();
        thing.set("b", 1).unwrap();
        thing.unobserve(id);
        thing.set("a", 2).unwrap();

        assert_eq!(*first.borrow(), 3);
        assert_eq!(*second.borrow(), 2);
    }

    #[test]
    fn test_dynamo_over_shared_node() {
        let base = Node::with_id("base");
        base.set("colour", "red");
        let node = Node::with_id("derived");
        node.inherit_from(&base).unwrap();

        let thing = Dynamo::with_provider(node.clone());
        assert_eq!(thing.get("colour").unwrap(), Value::from("red"));
        thing.set("colour", "blue").unwrap();
        assert_eq!(node.get("colour").unwrap(), Value::from("blue"));
        assert_eq!(base.get("colour").unwrap(), Value::from("red"));
        assert!(thing.provider().has_member("colour").unwrap());
    }
}

// ============================================================================
// Prototype
// ============================================================================

mod prototype_tests {
    use super::*;

    #[test]
    fn test_prototype_chain_of_three() {
        let animal = Prototype::new();
        animal.set("legs", 4).unwrap();
        animal.set("sounds", Value::sequence(vec!["breath"])).unwrap();

        let dog = Prototype::with_prototype(&animal).unwrap();
        dog.node().set_extend("sounds", vec!["bark"]);

        let puppy = Prototype::with_prototype(&dog).unwrap();
        puppy.node().set_extend("sounds", vec!["whine", "bark"]);

        assert_eq!(puppy.get("legs").unwrap(), Value::from(4));
        assert_eq!(joined(&puppy.get("sounds").unwrap()), "breath bark whine");
        assert!(!puppy.has_own_property("legs"));
        assert!(puppy.has_own_property("sounds"));
        assert!(animal.node().children().is_empty());
    }

    #[test]
    fn test_prototype_observers() {
        let seen = Rc::new(RefCell::new(vec![]));
        let log = seen.clone();
        let base = Prototype::new();
        base.set("name", "base").unwrap();
        let mut derived = Prototype::with_prototype(&base).unwrap();
        derived
            .dynamo_mut()
            .observe(move |name: &str| log.borrow_mut().push(name.to_string()));

        derived.set("name", "base").unwrap();
        derived.set("name", "derived").unwrap();
        assert_eq!(*seen.borrow(), vec!["name".to_string()]);
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_depth_limit_applies_to_child_config() {
        let root = Node::with_id("root");
        let mid = Node::with_id("mid");
        root.add_child(&mid).unwrap();

        let shallow = Node::with_config(Some("shallow".to_string()), ChainConfig::with_limit(1));
        let err = mid.add_child(&shallow).unwrap_err();
        assert_eq!(
            err,
            ChainError::InvalidRange(
                "a chain of 2 ancestors exceeds the configured maximum of 1".to_string()
            )
        );
        assert!(mid.children().is_empty());
        assert!(shallow.parent().is_none());

        root.add_child(&shallow).unwrap();
        assert_eq!(shallow.depth(), 1);
        assert_eq!(shallow.config(), ChainConfig::with_limit(1));
    }

    #[test]
    fn test_default_config_is_unlimited() {
        let mut chain = vec![Node::new()];
        for _ in 0..64 {
            let next = Node::new();
            next.inherit_from(&chain[chain.len() - 1]).unwrap();
            chain.push(next);
        }
        let leaf = &chain[chain.len() - 1];
        assert_eq!(leaf.depth(), 64);
        assert_eq!(leaf.config(), ChainConfig::unlimited());
    }

    #[test]
    fn test_dropped_ancestor_ends_chain() {
        let leaf = Node::new();
        {
            let ancestor = Node::new();
            ancestor.set("gone", true);
            leaf.inherit_from(&ancestor).unwrap();
            assert!(leaf.contains_key("gone").unwrap());
        }
        assert_eq!(leaf.depth(), 0);
        assert!(!leaf.contains_key("gone").unwrap());
    }
}
