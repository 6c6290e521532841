//! Thin layers on top of the chain: a member-access capability, an adapter
//! that reports member changes to observers, and a prototype-object wrapper.

pub mod dynamo;
pub mod member;
pub mod prototype;

pub use dynamo::{ChangeObserver, Dynamo, ObserverId};
pub use member::MemberAccess;
pub use prototype::Prototype;
