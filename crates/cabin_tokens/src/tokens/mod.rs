//! Token model
//!
//! Tokens are ingested once from JSON into typed values:
//! - Tree nodes (group or leaf)
//! - Leaf values (number, text, reference, ...)
//! - Reference pointers to other tokens

mod reference;
mod tree;
mod value;

pub use reference::*;
pub use tree::*;
pub use value::*;
