//! Byte-to-string conversion. Record text is ASCII, which is a subset of UTF-8, so
//! everything here decodes UTF-8.

use alloc::string::String;

use crate::{
    buf::span,
    error::{DdfError, DdfResult},
};

/// Decodes `bytes`, which were taken from `offset` of their record.
pub fn decode(bytes: &[u8], offset: usize) -> DdfResult<String> {
    match core::str::from_utf8(bytes) {
        Ok(text) => Ok(String::from(text)),
        Err(err) => {
            let offset = offset + err.valid_up_to();
            debug_event!(offset, "invalid text in record");
            Err(DdfError::InvalidText { offset })
        }
    }
}

/// Like [`decode`], but invalid text becomes an empty string.
pub fn decode_or_empty(bytes: &[u8]) -> String {
    core::str::from_utf8(bytes)
        .map(String::from)
        .unwrap_or_default()
}

/// Decodes `size` bytes at `offset` of a slice that is not held in a
/// [`ByteBuffer`](crate::ByteBuffer). An empty slice yields an empty string.
pub fn string_from(bytes: &[u8], offset: usize, size: usize) -> DdfResult<String> {
    if bytes.is_empty() {
        return Ok(String::new());
    }
    let range = span(bytes.len(), offset, size)?;
    decode(&bytes[range], offset)
}
