//! Mutation operation types.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// A single mutation.
///
/// Payloads are owned values that are not shared with anything else; build
/// them with [`Op::add`] and [`Op::set`] to copy caller data in.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add(Value),
    Set(Value),
    Remove,
}

impl Op {
    /// An `Add` carrying an isolated copy of `value`.
    pub fn add<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Op::Add(bjson_util::isolate(value)?))
    }

    /// A `Set` carrying an isolated copy of `value`.
    pub fn set<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Op::Set(bjson_util::isolate(value)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Add(_) => "add",
            Op::Set(_) => "set",
            Op::Remove => "remove",
        }
    }
}
