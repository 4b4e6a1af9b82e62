//! Path-addressed mutation of JSON trees.
//!
//! # Operations
//!
//! - `add` inserts a missing object key, or appends to an array found at
//!   the path (including the root).
//! - `set` overwrites an existing value, or the root.
//! - `remove` deletes an object key or array element; later elements shift
//!   left.
//!
//! Intermediate containers are never created. Every precondition is checked
//! before the single write at the tail, so a failed call leaves the tree
//! untouched.

pub mod types;
pub mod apply;

pub use apply::apply_op;
pub use types::Op;
