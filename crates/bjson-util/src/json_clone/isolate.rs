use serde::Serialize;
use serde_json::Value;

/// Produces an independent JSON value from anything serializable.
///
/// The input is encoded to canonical JSON text and parsed back into a fresh
/// [`Value`]. Typed structs, maps, slices and existing values all take the
/// same route, so whatever they contain is copied and nothing is shared with
/// the source.
///
/// # Errors
///
/// Fails when `value` cannot be represented as JSON (for example a map with
/// non-string keys, or a `Serialize` impl that reports an error). Nothing is
/// written anywhere in that case.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use bjson_util::json_clone::isolate;
///
/// let original = json!({"foo": [1, 2, 3]});
/// let copy = isolate(&original).unwrap();
/// assert_eq!(original, copy);
///
/// #[derive(serde::Serialize)]
/// struct Score { name: &'static str, score: f64 }
/// let typed = isolate(&Score { name: "t1", score: 0.95 }).unwrap();
/// assert_eq!(typed, json!({"name": "t1", "score": 0.95}));
/// ```
pub fn isolate<T: Serialize + ?Sized>(value: &T) -> Result<Value, serde_json::Error> {
    let text = serde_json::to_vec(value)?;
    serde_json::from_slice(&text)
}
