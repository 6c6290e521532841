//! Shared fixtures for the integration tests.
#![allow(dead_code)]

extern crate protochain;

use protochain::{Node, Value};

/// Routes log records to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Node "one" owning foo, bar and a two-element baz sequence.
pub fn node_one() -> Node {
    let one = Node::with_id("one");
    one.set("foo", "foo value");
    one.set("bar", "bar value");
    one.set("baz", Value::sequence(vec!["hello", "there"]));
    one
}

/// Renders a sequence value the way the fixtures describe them.
pub fn joined(value: &Value) -> String {
    value
        .as_sequence()
        .expect("value should be a sequence")
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
