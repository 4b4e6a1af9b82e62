//! JSON text encoding and decoding.
//!
//! Compact output carries no whitespace; pretty output indents with one tab
//! per level. Object keys come out sorted, which makes the compact form the
//! canonical text used by escape and by copies.
//!
//! Decoding accepts at most [`MAX_NESTING`] levels of arrays and objects;
//! mutations refuse to build anything deeper, so every tree can be parsed
//! back from its own text.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Deepest nesting of arrays and objects the decoder accepts.
///
/// `[]` nests one level and `[[]]` two; scalars nest zero.
pub const MAX_NESTING: usize = 127;

/// Output options for [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarshalOptions {
    /// Indent with tabs and put each member on its own line.
    pub pretty: bool,
}

impl Default for MarshalOptions {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl MarshalOptions {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Compact canonical JSON text.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Tab-indented JSON text.
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| {
        serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)).into()
    })
}

pub fn encode_with<T: Serialize + ?Sized>(value: &T, options: MarshalOptions) -> Result<String> {
    if options.pretty {
        encode_pretty(value)
    } else {
        encode(value)
    }
}

pub fn decode_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
