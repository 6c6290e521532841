//! Data structures of the chain: values, own stores, nodes, and the
//! operations that resolve and aggregate properties across a chain.

pub mod container;
pub mod enumerator;
pub mod error;
pub mod node;
pub mod operations;
pub mod property;
pub mod store;
pub mod value;
