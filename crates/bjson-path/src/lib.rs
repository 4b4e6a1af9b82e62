//! Segment paths over JSON trees.
//!
//! A path is an ordered list of string segments. Whether a segment is an
//! object key or an array index is decided by the container it meets at
//! runtime, so `"0"` names the key `"0"` in an object and the first element
//! in an array.
//!
//! Paths are rendered as [JSON Pointers (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! in diagnostics.
//!
//! # Example
//!
//! ```
//! use bjson_path::{format_json_pointer, parse_json_pointer, resolve};
//!
//! let path = parse_json_pointer("/d/1").unwrap();
//! assert_eq!(format_json_pointer(&path), "/d/1");
//!
//! let doc = serde_json::json!({"d": ["f", 123, 456]});
//! let segments: Vec<&str> = path.iter().map(String::as_str).collect();
//! assert_eq!(resolve(&doc, &segments).unwrap(), &serde_json::json!(123));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Location, Path, Segment};

mod resolve;
pub use resolve::{resolve, resolve_mut};

mod util;
pub use util::{
    decode_segment, encode_segment, format_json_pointer, parse_index, parse_json_pointer,
    parse_json_pointer_relaxed,
};

/// Path lookup failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("element {0} is not found")]
    NotFound(Location),
    #[error("element {0} is not a valid index for a JSON array")]
    InvalidIndex(Location),
}

/// Pointer text that is neither empty nor starts with `/`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("pointer {0:?} must be empty or start with '/'")]
pub struct MalformedPointer(pub String);

impl PathError {
    /// Where the lookup stopped.
    pub fn location(&self) -> &Location {
        match self {
            PathError::NotFound(loc) | PathError::InvalidIndex(loc) => loc,
        }
    }
}
