use std::fmt::Write as _;

/// Escapes `s` so it can be placed between double quotes in JSON text.
///
/// Double quote and backslash get a backslash prefix. Control characters
/// below U+0020 use the short forms `\b`, `\t`, `\n`, `\f` and `\r` where
/// JSON has one, and `\u00XX` with lowercase hex otherwise. Every other
/// character is copied through untouched, which is the same output
/// `serde_json` produces for string values.
///
/// # Examples
///
/// ```
/// use bjson_util::strings::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let short = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{0008}' => "\\b",
            '\t' => "\\t",
            '\n' => "\\n",
            '\u{000C}' => "\\f",
            '\r' => "\\r",
            c if c < '\u{0020}' => "",
            _ => continue,
        };

        out.push_str(&s[last..i]);
        if short.is_empty() {
            // Writing into a String cannot fail.
            let _ = write!(out, "\\u{:04x}", ch as u32);
        } else {
            out.push_str(short);
        }
        last = i + ch.len_utf8();
    }

    out.push_str(&s[last..]);
    out
}
