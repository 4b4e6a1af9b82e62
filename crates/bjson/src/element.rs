//! The tree handle.

use std::fmt;
use std::str::FromStr;

use bjson_path::resolve;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, MarshalOptions};
use crate::error::{Error, Result};
use crate::escape;
use crate::fs;
use crate::mutate::{apply_op, Op};

/// An owned JSON tree addressed by segment paths.
///
/// Values passed in are copied through canonical JSON text before they are
/// stored, and values handed out are copies too, so nothing outside the
/// element can observe or change its tree except through these methods.
///
/// ```
/// use bjson::Element;
///
/// let mut doc = Element::new(&serde_json::json!({"a": {"b": "value"}})).unwrap();
/// doc.escape(&["a"]).unwrap();
/// assert_eq!(doc.to_string(), r#"{"a":"{\"b\":\"value\"}"}"#);
/// doc.unescape(&["a"]).unwrap();
/// assert_eq!(doc.get(&["a", "b"]).unwrap().to_string(), r#""value""#);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element {
    value: Value,
}

impl Element {
    /// Build a tree from any serializable data.
    pub fn new<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        Ok(Self::from_value(bjson_util::isolate(data)?))
    }

    /// Take ownership of an already-built value.
    ///
    /// The value is stored as given. A value nesting deeper than
    /// [`MAX_NESTING`](crate::codec::MAX_NESTING) cannot be copied or parsed
    /// back from its text.
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Parse JSON text held in bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        codec::decode_slice(bytes).map(Self::from_value)
    }

    /// Read and parse a whole JSON file.
    pub fn from_file(file: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = fs::read_bytes(file.as_ref())?;
        Self::from_slice(&bytes)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    // ── Read ──────────────────────────────────────────────────────────────

    /// A copy of the sub-tree at `path`.
    pub fn get(&self, path: &[&str]) -> Result<Element> {
        let found = resolve(&self.value, path)?;
        Element::new(found)
    }

    /// Deserialize the sub-tree at `path` into `T`.
    ///
    /// A shape that does not fit `T` is a [`Error::SerializationFailure`].
    pub fn unmarshal<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let found = resolve(&self.value, path)?;
        Ok(T::deserialize(found)?)
    }

    /// Entries of an object, elements of an array, bytes of a string; 0 for
    /// anything else.
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Object(map) => map.len(),
            Value::Array(arr) => arr.len(),
            Value::String(s) => s.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fully independent copy of the whole tree.
    pub fn copy(&self) -> Result<Element> {
        Element::new(&self.value)
    }

    // ── Write ─────────────────────────────────────────────────────────────

    /// Insert `value` under a missing key, or append it to an array at
    /// `path`.
    pub fn add<T: Serialize + ?Sized>(&mut self, value: &T, path: &[&str]) -> Result<()> {
        self.apply(path, Op::add(value)?)
    }

    /// Overwrite the existing value at `path`.
    pub fn set<T: Serialize + ?Sized>(&mut self, value: &T, path: &[&str]) -> Result<()> {
        self.apply(path, Op::set(value)?)
    }

    /// Delete the value at `path`.
    pub fn remove(&mut self, path: &[&str]) -> Result<()> {
        self.apply(path, Op::Remove)
    }

    pub fn apply(&mut self, path: &[&str], op: Op) -> Result<()> {
        apply_op(&mut self.value, path, op)
    }

    /// Replace the value at `path` with a string of its JSON text.
    pub fn escape(&mut self, path: &[&str]) -> Result<()> {
        escape::escape(&mut self.value, path)
    }

    /// Parse the string at `path` as JSON in place.
    pub fn unescape(&mut self, path: &[&str]) -> Result<()> {
        escape::unescape(&mut self.value, path)
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// JSON text of the sub-tree at `path`, tab-indented when `pretty`.
    pub fn marshal(&self, pretty: bool, path: &[&str]) -> Result<String> {
        self.marshal_with(MarshalOptions { pretty }, path)
    }

    pub fn marshal_with(&self, options: MarshalOptions, path: &[&str]) -> Result<String> {
        let found = resolve(&self.value, path)?;
        codec::encode_with(found, options)
    }

    /// Write the sub-tree at `path` to `file`.
    pub fn marshal_write(
        &self,
        file: impl AsRef<std::path::Path>,
        pretty: bool,
        path: &[&str],
    ) -> Result<()> {
        let text = self.marshal(pretty, path)?;
        fs::write_text(file.as_ref(), &text)
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        codec::decode_str(s).map(Self::from_value)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = codec::encode(&self.value).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
