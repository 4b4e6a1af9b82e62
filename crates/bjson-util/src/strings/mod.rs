//! String utilities.
//!
//! Escaping of text for embedding inside JSON string literals, and the
//! quote/unquote pair built on top of it.

mod escape;
mod quote;

pub use escape::escape;
pub use quote::{quote, unquote};
