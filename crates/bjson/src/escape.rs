//! Conversion between a value and its quoted JSON text.
//!
//! Escaping replaces the value at a path with a string holding that value's
//! canonical JSON text; unescaping parses such a string back in place.
//! `{"a":{"b":"value"}}` escaped at `a` becomes `{"a":"{\"b\":\"value\"}"}`.

use bjson_path::{format_json_pointer, resolve, Location};
use bjson_util::{quote, unquote};
use serde_json::Value;
use tracing::trace;

use crate::codec;
use crate::error::{Error, Result};
use crate::mutate::{apply_op, Op};
use crate::value::Kind;

/// Replace the value at `path` with its JSON text as a string.
///
/// An empty string is left alone.
pub fn escape(root: &mut Value, path: &[&str]) -> Result<()> {
    let current = resolve(root, path)?;
    if is_empty_string(current) {
        trace!(pointer = %format_json_pointer(path), "escape skipped empty string");
        return Ok(());
    }

    let literal = quote(&codec::encode(current)?);
    let escaped: Value = codec::decode_str(&literal)?;
    apply_op(root, path, Op::Set(escaped))
}

/// Parse the string at `path` as JSON and put the result in its place.
///
/// An empty string is left alone. Anything other than a string is a
/// [`Error::TypeMismatch`]; a string that is not JSON text is a
/// [`Error::SerializationFailure`].
pub fn unescape(root: &mut Value, path: &[&str]) -> Result<()> {
    let current = resolve(root, path)?;
    if is_empty_string(current) {
        trace!(pointer = %format_json_pointer(path), "unescape skipped empty string");
        return Ok(());
    }
    if !current.is_string() {
        return Err(Error::type_mismatch(
            Location::new(path, path.len()),
            "string",
            Kind::of(current),
        ));
    }

    let raw = unquote(&codec::encode(current)?).ok_or_else(|| {
        Error::type_mismatch(Location::new(path, path.len()), "quoted JSON string", Kind::String)
    })?;
    let parsed: Value = codec::decode_str(&raw)?;
    apply_op(root, path, Op::Set(parsed))
}

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}
