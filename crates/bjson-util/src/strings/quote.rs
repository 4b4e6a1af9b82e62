use super::escape;

/// Wraps `s` in double quotes as a JSON string literal.
///
/// ```
/// use bjson_util::strings::quote;
///
/// assert_eq!(quote("test"), "\"test\"");
/// assert_eq!(quote(r#"{"a":1}"#), r#""{\"a\":1}""#);
/// ```
pub fn quote(s: &str) -> String {
    let escaped = escape(s);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('"');
    out.push_str(&escaped);
    out.push('"');
    out
}

/// Reads a JSON string literal and returns the text it denotes.
///
/// Returns `None` when `literal` is not exactly one well-formed JSON string
/// (surrounding whitespace is tolerated).
///
/// ```
/// use bjson_util::strings::unquote;
///
/// assert_eq!(unquote(r#""a\"b""#).as_deref(), Some("a\"b"));
/// assert_eq!(unquote("test"), None);
/// ```
pub fn unquote(literal: &str) -> Option<String> {
    serde_json::from_str::<String>(literal).ok()
}
