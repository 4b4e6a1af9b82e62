//! JSON cloning utilities.
//!
//! Values that enter or leave a tree are copied through canonical JSON text,
//! so the copy never shares structure with its source.

mod isolate;

pub use isolate::isolate;
