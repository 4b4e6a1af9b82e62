//! Whole-file reads and writes of JSON documents.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec::{self, MarshalOptions};
use crate::error::Result;

/// Serialize `value` and write it to `file`, replacing any previous content.
pub fn marshal_write<T: Serialize + ?Sized>(
    file: impl AsRef<Path>,
    value: &T,
    pretty: bool,
) -> Result<()> {
    let text = codec::encode_with(value, MarshalOptions { pretty })?;
    write_text(file.as_ref(), &text)
}

/// Read `file` and deserialize its whole content.
pub fn unmarshal_read<T: DeserializeOwned>(file: impl AsRef<Path>) -> Result<T> {
    let bytes = read_bytes(file.as_ref())?;
    codec::decode_slice(&bytes)
}

pub(crate) fn read_bytes(file: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(file)?;
    debug!(file = %file.display(), len = bytes.len(), "read document");
    Ok(bytes)
}

pub(crate) fn write_text(file: &Path, text: &str) -> Result<()> {
    std::fs::write(file, text)?;
    debug!(file = %file.display(), len = text.len(), "wrote document");
    Ok(())
}
