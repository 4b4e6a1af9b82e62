//! bjson — path-addressed CRUD over schemaless JSON trees.
//!
//! Read arbitrary JSON, then add, get, set, remove, escape and unescape
//! values by a path of keys and indices without declaring a schema.
//!
//! # Example
//!
//! ```
//! use bjson::Element;
//!
//! let mut doc: Element = r#"{"k":[1,2],"d":["f",123,456]}"#.parse().unwrap();
//! doc.add(&3, &["k"]).unwrap();
//! doc.remove(&["d", "1"]).unwrap();
//! assert_eq!(doc.to_string(), r#"{"d":["f",456],"k":[1,2,3]}"#);
//! ```
//!
//! Every value that enters or leaves a tree is copied through canonical JSON
//! text, so callers never hold an alias into an [`Element`].

pub mod value;
pub mod error;
pub mod codec;
pub mod mutate;
pub mod escape;
pub mod element;
pub mod fs;
pub mod cli;

pub use bjson_path::{Location, Path, Segment};
pub use codec::MarshalOptions;
pub use element::Element;
pub use error::{Error, Result};
pub use fs::{marshal_write, unmarshal_read};
pub use mutate::Op;
pub use value::{Kind, Value};
