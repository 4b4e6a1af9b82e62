//! Pointer text and index parsing.

use crate::types::Path;
use crate::MalformedPointer;

/// Decode one reference token of an RFC 6901 pointer.
///
/// `~0` stands for `~` and `~1` for `/`. A `~` followed by anything else is
/// kept as written.
///
/// ```
/// use bjson_path::decode_segment;
///
/// assert_eq!(decode_segment("k~1v"), "k/v");
/// assert_eq!(decode_segment("~01"), "~1");
/// ```
pub fn decode_segment(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '~' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('0') => {
                out.push('~');
                chars.next();
            }
            Some('1') => {
                out.push('/');
                chars.next();
            }
            _ => out.push('~'),
        }
    }
    out
}

/// Encode a segment as an RFC 6901 reference token.
///
/// ```
/// use bjson_path::encode_segment;
///
/// assert_eq!(encode_segment("k/v"), "k~1v");
/// assert_eq!(encode_segment("~"), "~0");
/// ```
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        match ch {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            _ => out.push(ch),
        }
    }
    out
}

/// Split a JSON Pointer into segments.
///
/// The empty pointer is the root; anything else must start with `/`.
/// Callers that accept bare paths should use [`parse_json_pointer_relaxed`].
///
/// ```
/// use bjson_path::parse_json_pointer;
///
/// assert!(parse_json_pointer("").unwrap().is_empty());
/// assert_eq!(parse_json_pointer("/v4/z").unwrap(), ["v4", "z"]);
/// assert_eq!(parse_json_pointer("/").unwrap(), [""]);
/// assert!(parse_json_pointer("v4/z").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, MalformedPointer> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    match pointer.strip_prefix('/') {
        Some(rest) => Ok(rest.split('/').map(decode_segment).collect()),
        None => Err(MalformedPointer(pointer.to_string())),
    }
}

/// Like [`parse_json_pointer`], but a pointer without a leading `/` is read
/// as if it had one.
///
/// ```
/// use bjson_path::parse_json_pointer_relaxed;
///
/// assert_eq!(parse_json_pointer_relaxed("d/1"), ["d", "1"]);
/// assert_eq!(parse_json_pointer_relaxed("/d/1"), ["d", "1"]);
/// ```
pub fn parse_json_pointer_relaxed(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let rest = pointer.strip_prefix('/').unwrap_or(pointer);
    rest.split('/').map(decode_segment).collect()
}

/// Join segments into a JSON Pointer; the root is the empty string.
///
/// ```
/// use bjson_path::format_json_pointer;
///
/// assert_eq!(format_json_pointer::<&str>(&[]), "");
/// assert_eq!(format_json_pointer(&["v4", "z"]), "/v4/z");
/// assert_eq!(format_json_pointer(&["a/b"]), "/a~1b");
/// ```
pub fn format_json_pointer<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|segment| format!("/{}", encode_segment(segment.as_ref())))
        .collect()
}

/// Interpret `segment` as an index into an array of length `len`.
///
/// Accepts base-10 digits only (leading zeros allowed, no sign). Returns
/// `None` when the text is not an integer or the index is outside
/// `[0, len)`.
///
/// ```
/// use bjson_path::parse_index;
///
/// assert_eq!(parse_index("1", 3), Some(1));
/// assert_eq!(parse_index("007", 8), Some(7));
/// assert_eq!(parse_index("3", 3), None);
/// assert_eq!(parse_index("-1", 3), None);
/// assert_eq!(parse_index("x", 3), None);
/// ```
pub fn parse_index(segment: &str, len: usize) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<usize>().ok().filter(|idx| *idx < len)
}
