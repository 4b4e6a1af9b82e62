//! bjson-util - utility functions for bjson
//!
//! Value isolation through a serialize/parse round trip, and quoting of text
//! as JSON string literals.

pub mod json_clone;
pub mod strings;

// Re-exports for convenience
pub use json_clone::isolate;
pub use strings::{escape, quote, unquote};
