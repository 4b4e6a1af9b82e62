use serde_json::Value;

use crate::types::Location;
use crate::util::parse_index;
use crate::PathError;

/// Resolve `path` against `root`.
///
/// Each segment is looked up as a key when the current value is an object
/// and as a decimal index when it is an array. Scalars cannot be descended
/// into. An empty path resolves to `root` itself.
///
/// # Errors
///
/// - [`PathError::NotFound`] - a key is absent or a scalar is in the way
/// - [`PathError::InvalidIndex`] - an array segment is not an integer or is
///   out of range
///
/// # Example
///
/// ```
/// use bjson_path::{resolve, PathError};
/// use serde_json::json;
///
/// let doc = json!({"parent": {"child": [1, 2, 3]}});
/// assert_eq!(resolve(&doc, &["parent", "child", "1"]).unwrap(), &json!(2));
///
/// let err = resolve(&doc, &["parent", "missing"]).unwrap_err();
/// assert!(matches!(err, PathError::NotFound(_)));
/// assert_eq!(err.location().passed(), ["parent"]);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, PathError> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        current = match current {
            Value::Object(map) => map
                .get(*segment)
                .ok_or_else(|| PathError::NotFound(Location::new(path, depth)))?,
            Value::Array(arr) => {
                let idx = parse_index(segment, arr.len())
                    .ok_or_else(|| PathError::InvalidIndex(Location::new(path, depth)))?;
                &arr[idx]
            }
            _ => return Err(PathError::NotFound(Location::new(path, depth))),
        };
    }
    Ok(current)
}

/// Mutable twin of [`resolve`], with identical lookup rules.
pub fn resolve_mut<'a>(root: &'a mut Value, path: &[&str]) -> Result<&'a mut Value, PathError> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        current = match current {
            Value::Object(map) => map
                .get_mut(*segment)
                .ok_or_else(|| PathError::NotFound(Location::new(path, depth)))?,
            Value::Array(arr) => {
                let idx = parse_index(segment, arr.len())
                    .ok_or_else(|| PathError::InvalidIndex(Location::new(path, depth)))?;
                &mut arr[idx]
            }
            _ => return Err(PathError::NotFound(Location::new(path, depth))),
        };
    }
    Ok(current)
}
