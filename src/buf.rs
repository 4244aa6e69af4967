use alloc::{string::String, vec, vec::Vec};
use core::ops::Range;

use crate::{
    error::{DdfError, DdfResult},
    int, text,
};

/// An owned record buffer with a read cursor.
///
/// Index-addressed accessors never touch the cursor; the sequential API (`skip`,
/// `read_byte`, `read_string`, `decode_integer`, ...) reads and advances it.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    /// How far along the sequential API is in the buffer
    // position <= bytes.len() must always be upheld
    position: usize,
}

/// Bounds-checks `offset..offset + size` against a buffer of `len` bytes.
pub(crate) fn span(len: usize, offset: usize, size: usize) -> DdfResult<Range<usize>> {
    match offset.checked_add(size) {
        Some(end) if end <= len => Ok(offset..end),
        end => {
            let end = end.unwrap_or(usize::MAX);
            trace_event!(offset, end, len, "range out of bounds");
            Err(DdfError::OutOfRange { offset, end, len })
        }
    }
}

impl ByteBuffer {
    pub const fn new() -> Self {
        ByteBuffer {
            bytes: Vec::new(),
            position: 0,
        }
    }

    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        ByteBuffer { bytes, position: 0 }
    }

    /// Stores the UTF-8 encoding of `text`.
    pub fn from_string(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }

    /// Copies `len` bytes out of a region owned by someone else.
    ///
    /// # Safety
    /// `data` must be valid for reads of `len` bytes for the duration of the call.
    /// It may be null only when `len` is 0.
    pub unsafe fn from_foreign(data: *const u8, len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        // SAFETY: The caller guarantees that data..data + len is readable
        let blob = unsafe { core::slice::from_raw_parts(data, len) };
        Self::from(blob)
    }

    /// A buffer of `len` zero bytes.
    pub fn with_length(len: usize) -> Self {
        Self::from_bytes(vec![0; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn append(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Truncates or zero-extends the storage to `len` bytes. A cursor past the new end is
    /// pulled back to it.
    pub fn resize(&mut self, len: usize) {
        self.bytes.resize(len, 0);
        self.position = self.position.min(len);
    }

    /// Returns 0 for an empty buffer.
    pub fn byte_at(&self, index: usize) -> DdfResult<u8> {
        if self.bytes.is_empty() {
            return Ok(0);
        }
        let range = span(self.len(), index, 1)?;
        Ok(self.bytes[range.start])
    }

    /// The byte at `index` as a character, or `None` if there is no such byte.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.bytes.get(index).map(|&byte| char::from(byte))
    }

    /// Exactly `count` bytes starting at `index`. An empty buffer yields an empty slice.
    pub fn bytes_at(&self, index: usize, count: usize) -> DdfResult<&[u8]> {
        if self.bytes.is_empty() {
            return Ok(&[]);
        }
        let range = span(self.len(), index, count)?;
        Ok(&self.bytes[range])
    }

    /// Everything from `offset` to the end, or nothing if `offset` is past the end.
    pub fn bytes_from(&self, offset: usize) -> &[u8] {
        self.bytes.get(offset..).unwrap_or(&[])
    }

    /// Bounds check shared by `string_at` and `int_field_at`.
    ///
    /// The byte at `index + length` must exist even though it is not part of the
    /// result, so a field that ends exactly at the end of the buffer is rejected.
    fn strict_span(&self, index: usize, length: usize) -> DdfResult<Range<usize>> {
        match index.checked_add(length) {
            Some(end) if end < self.len() => Ok(index..end),
            end => {
                let end = end.unwrap_or(usize::MAX);
                trace_event!(index, end, len = self.len(), "strict range out of bounds");
                Err(DdfError::OutOfRange {
                    offset: index,
                    end,
                    len: self.len(),
                })
            }
        }
    }

    /// Decodes `length` bytes at `index`. Fails unless `index + length < len()`.
    pub fn string_at(&self, index: usize, length: usize) -> DdfResult<String> {
        let range = self.strict_span(index, length)?;
        text::decode(&self.bytes[range], index)
    }

    /// Decodes `size` bytes at `offset`, allowing the field to end at the end of the buffer.
    pub fn string_in(&self, offset: usize, size: usize) -> DdfResult<String> {
        text::string_from(&self.bytes, offset, size)
    }

    /// The numeric value of the byte at `index`, not the digit it may spell.
    pub fn int_at(&self, index: usize) -> DdfResult<i64> {
        self.byte_at(index).map(i64::from)
    }

    /// Parses `length` bytes at `index` as a space-padded, optionally signed decimal.
    /// Uses the same bounds as [`ByteBuffer::string_at`].
    pub fn int_field_at(&self, index: usize, length: usize) -> DdfResult<i64> {
        let range = self.strict_span(index, length)?;
        int::parse_signed(&self.bytes[range], index)
    }

    /// Text from `from` to the end. Never fails: out of range or invalid text is empty.
    pub fn substring(&self, from: usize) -> String {
        match self.bytes.get(from..) {
            Some(tail) => text::decode_or_empty(tail),
            None => String::new(),
        }
    }

    /// Text from `from` to `from + length`. Never fails: out of range or invalid text is
    /// empty.
    pub fn substring_len(&self, from: usize, length: usize) -> String {
        match span(self.len(), from, length) {
            Ok(range) => text::decode_or_empty(&self.bytes[range]),
            Err(_) => String::new(),
        }
    }

    /// True if every byte is an ASCII letter, digit or space.
    pub fn is_alphanumeric(&self) -> bool {
        self.bytes
            .iter()
            .all(|&byte| byte.is_ascii_alphanumeric() || byte == b' ')
    }

    /// Moves the cursor forward by `count` bytes.
    pub fn skip(&mut self, count: usize) -> DdfResult<()> {
        let target = self.position.checked_add(count).unwrap_or(usize::MAX);
        self.goto_position(target)
    }

    /// Returns 0 without moving the cursor if the buffer is empty.
    pub fn read_byte(&mut self) -> DdfResult<u8> {
        if self.bytes.is_empty() {
            return Ok(0);
        }
        let Some(&byte) = self.bytes.get(self.position) else {
            trace_event!(position = self.position, "read past the end of the buffer");
            return Err(DdfError::CursorOutOfRange {
                position: self.position,
                len: self.len(),
            });
        };
        self.position += 1;
        Ok(byte)
    }

    /// Reads `size` bytes of text at the cursor. A read that would pass the end of the
    /// buffer yields an empty string and leaves the cursor alone.
    pub fn read_string(&mut self, size: usize) -> DdfResult<String> {
        let Ok(range) = span(self.len(), self.position, size) else {
            return Ok(String::new());
        };
        let string = text::decode(&self.bytes[range.clone()], range.start)?;
        self.position = range.end;
        Ok(string)
    }

    /// Decodes `size` zero-padded digits at the cursor and advances past them.
    /// Returns 0 for an empty buffer.
    pub fn decode_integer(&mut self, size: usize) -> DdfResult<i64> {
        let value = self.decode_integer_at(self.position, size)?;
        if !self.bytes.is_empty() {
            // decode_integer_at checked that position + size is in bounds
            self.position += size;
        }
        Ok(value)
    }

    /// Decodes `size` zero-padded digits at `offset`. Returns 0 for an empty buffer.
    pub fn decode_integer_at(&self, offset: usize, size: usize) -> DdfResult<i64> {
        if self.bytes.is_empty() {
            return Ok(0);
        }
        int::get_integer(&self.bytes, offset, size)
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`, which may equal but not exceed `len()`.
    pub fn goto_position(&mut self, position: usize) -> DdfResult<()> {
        if position > self.len() {
            trace_event!(position, len = self.len(), "cursor target out of bounds");
            return Err(DdfError::CursorOutOfRange {
                position,
                len: self.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Bytes not yet read by the sequential API.
    #[inline]
    pub fn available(&self) -> &[u8] {
        &self.bytes[self.position..]
    }

    /// Bytes already read by the sequential API.
    #[inline]
    pub fn consumed(&self) -> &[u8] {
        &self.bytes[..self.position]
    }

    #[inline]
    pub fn peek(&self, count: usize) -> Option<&[u8]> {
        self.available().get(..count)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl From<&str> for ByteBuffer {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}

impl From<String> for ByteBuffer {
    fn from(text: String) -> Self {
        Self::from_bytes(text.into_bytes())
    }
}
