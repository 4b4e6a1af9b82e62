//! Mutation apply logic.

use bjson_path::{format_json_pointer, parse_index, resolve_mut, Location, PathError};
use serde_json::{Map, Value};
use tracing::debug;

use super::types::Op;
use crate::codec::MAX_NESTING;
use crate::error::{Error, Result};

/// Apply `op` to `root` at `path`.
///
/// Non-tail segments follow the lookup rules of [`bjson_path::resolve`];
/// the tail segment is interpreted by the container that holds it. On error
/// `root` is unchanged.
///
/// A write that would nest containers deeper than [`MAX_NESTING`] is an
/// [`Error::InvalidOperation`].
pub fn apply_op(root: &mut Value, path: &[&str], op: Op) -> Result<()> {
    let name = op.name();
    match path.split_last() {
        None => apply_root(root, op)?,
        Some((tail, parents)) => {
            let parent = resolve_mut(root, parents).map_err(|e| widen(e, path))?;
            match parent {
                Value::Object(map) => apply_object(map, tail, path, op)?,
                Value::Array(arr) => apply_array(arr, tail, path, op)?,
                _ => return Err(Error::NotFound(Location::new(path, parents.len()))),
            }
        }
    }
    debug!(op = name, pointer = %format_json_pointer(path), "applied");
    Ok(())
}

// Lookups of the parent only know the parent path; report the full one.
fn widen(err: PathError, path: &[&str]) -> Error {
    let consumed = err.location().consumed();
    match err {
        PathError::NotFound(_) => Error::NotFound(Location::new(path, consumed)),
        PathError::InvalidIndex(_) => Error::InvalidIndex(Location::new(path, consumed)),
    }
}

// `value` lands below `levels` containers.
fn check_nesting(value: &Value, levels: usize, path: &[&str]) -> Result<()> {
    if levels > MAX_NESTING || nests_deeper_than(value, MAX_NESTING - levels) {
        return Err(Error::invalid_operation(
            Location::new(path, path.len()),
            "the write would nest arrays and objects too deeply",
        ));
    }
    Ok(())
}

fn nests_deeper_than(value: &Value, budget: usize) -> bool {
    match value {
        Value::Array(arr) => budget == 0 || arr.iter().any(|v| nests_deeper_than(v, budget - 1)),
        Value::Object(map) => budget == 0 || map.values().any(|v| nests_deeper_than(v, budget - 1)),
        _ => false,
    }
}

// ── Tail applicators ─────────────────────────────────────────────────────

fn apply_root(root: &mut Value, op: Op) -> Result<()> {
    let here = || Location::new::<&str>(&[], 0);
    match op {
        Op::Add(value) => match root {
            Value::Array(arr) => {
                check_nesting(&value, 1, &[])?;
                arr.push(value);
                Ok(())
            }
            _ => Err(Error::invalid_operation(here(), "only an array root accepts add")),
        },
        Op::Set(value) => {
            check_nesting(&value, 0, &[])?;
            *root = value;
            Ok(())
        }
        Op::Remove => Err(Error::invalid_operation(here(), "the root cannot be removed")),
    }
}

fn apply_object(map: &mut Map<String, Value>, key: &str, path: &[&str], op: Op) -> Result<()> {
    let missing = || Error::NotFound(Location::new(path, path.len() - 1));
    match op {
        Op::Add(value) => {
            if !map.contains_key(key) {
                check_nesting(&value, path.len(), path)?;
                map.insert(key.to_string(), value);
                return Ok(());
            }
            match map.get_mut(key) {
                Some(Value::Array(arr)) => {
                    check_nesting(&value, path.len() + 1, path)?;
                    arr.push(value);
                    Ok(())
                }
                _ => Err(Error::AlreadyExists(Location::new(path, path.len()))),
            }
        }
        Op::Set(value) => {
            let slot = map.get_mut(key).ok_or_else(missing)?;
            check_nesting(&value, path.len(), path)?;
            *slot = value;
            Ok(())
        }
        Op::Remove => map.remove(key).map(drop).ok_or_else(missing),
    }
}

fn apply_array(arr: &mut Vec<Value>, segment: &str, path: &[&str], op: Op) -> Result<()> {
    let idx = parse_index(segment, arr.len())
        .ok_or_else(|| Error::InvalidIndex(Location::new(path, path.len() - 1)))?;
    match op {
        Op::Add(value) => match &mut arr[idx] {
            Value::Array(nested) => {
                check_nesting(&value, path.len() + 1, path)?;
                nested.push(value);
                Ok(())
            }
            _ => Err(Error::invalid_operation(
                Location::new(path, path.len()),
                "add into an array element needs that element to be an array",
            )),
        },
        Op::Set(value) => {
            check_nesting(&value, path.len(), path)?;
            arr[idx] = value;
            Ok(())
        }
        Op::Remove => {
            arr.remove(idx);
            Ok(())
        }
    }
}
