//! Delimiter-terminated variable-length fields.
//!
//! Scans always start at offset 0 of the buffer's storage, not at the cursor; slice the
//! record down to the region of interest first.

use alloc::string::String;

use crate::{ByteBuffer, text};

/// Ends a subfield.
pub const UNIT_TERMINATOR: u8 = 0x1F;
/// Ends a field.
pub const FIELD_TERMINATOR: u8 = 0x1E;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fetched<'s> {
    /// Bytes scanned, including the terminator if one was found
    pub consumed: usize,
    /// Bytes before the terminator
    pub bytes: &'s [u8],
}

impl ByteBuffer {
    /// Where scanning stops: at the first delimiter, at `max_len - 1`, or at the end of
    /// the buffer, whichever comes first.
    fn scan(&self, max_len: usize, is_delimiter: impl Fn(u8) -> bool) -> usize {
        let limit = max_len.saturating_sub(1).min(self.len());
        self.as_bytes()[..limit]
            .iter()
            .position(|&byte| is_delimiter(byte))
            .unwrap_or(limit)
    }

    /// Length of the field ending at `delimiter`, not counting the delimiter.
    pub fn variable_length(&self, max_len: usize, delimiter: u8) -> usize {
        self.scan(max_len, |byte| byte == delimiter)
    }

    /// Extracts the field that ends at either delimiter.
    ///
    /// If neither delimiter shows up within the first `max_len - 1` bytes, the field is
    /// cut there and `consumed` counts no terminator.
    pub fn fetch_field(&self, max_len: usize, first: u8, second: u8) -> Fetched<'_> {
        let is_delimiter = |byte: u8| byte == first || byte == second;
        let end = self.scan(max_len, is_delimiter);
        let terminated = end < max_len
            && self
                .as_bytes()
                .get(end)
                .is_some_and(|&byte| is_delimiter(byte));
        Fetched {
            consumed: end + usize::from(terminated),
            bytes: &self.as_bytes()[..end],
        }
    }

    /// [`ByteBuffer::fetch_field`] decoded as text. Invalid text yields an empty string;
    /// the consumed count is reported either way.
    pub fn fetch_string(&self, max_len: usize, first: u8, second: u8) -> (usize, String) {
        let Fetched { consumed, bytes } = self.fetch_field(max_len, first, second);
        (consumed, text::decode_or_empty(bytes))
    }

    /// Text before the first occurrence of `terminator`, or the whole buffer if it never
    /// occurs. Empty for an empty buffer or invalid text.
    pub fn field_as_string(&self, terminator: &[u8]) -> String {
        let bytes = self.as_bytes();
        if bytes.is_empty() {
            return String::new();
        }
        let end = if terminator.is_empty() {
            bytes.len()
        } else {
            bytes
                .windows(terminator.len())
                .position(|window| window == terminator)
                .unwrap_or(bytes.len())
        };
        text::decode_or_empty(&bytes[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_length_stops_at_delimiter() {
        let buf = ByteBuffer::from(&b"AB\x1e"[..]);
        assert_eq!(buf.variable_length(5, FIELD_TERMINATOR), 2);
        assert_eq!(buf.variable_length(2, FIELD_TERMINATOR), 1);
        assert_eq!(buf.variable_length(0, FIELD_TERMINATOR), 0);
        assert_eq!(buf.variable_length(5, UNIT_TERMINATOR), 3);
    }

    #[test]
    fn fetch_field_counts_the_terminator() {
        let buf = ByteBuffer::from(&b"ABC\x1exyz"[..]);
        let fetched = buf.fetch_field(10, FIELD_TERMINATOR, UNIT_TERMINATOR);
        assert_eq!(
            fetched,
            Fetched {
                consumed: 4,
                bytes: b"ABC"
            }
        );

        let buf = ByteBuffer::from(&b"AB\x1fC\x1e"[..]);
        let fetched = buf.fetch_field(10, FIELD_TERMINATOR, UNIT_TERMINATOR);
        assert_eq!(fetched.consumed, 3);
        assert_eq!(fetched.bytes, b"AB");
    }

    #[test]
    fn fetch_field_without_terminator() {
        let buf = ByteBuffer::from(&b"ABCDEFG"[..]);
        let fetched = buf.fetch_field(4, FIELD_TERMINATOR, UNIT_TERMINATOR);
        assert_eq!(fetched.consumed, 3);
        assert_eq!(fetched.bytes, b"ABC");

        let fetched = buf.fetch_field(100, FIELD_TERMINATOR, UNIT_TERMINATOR);
        assert_eq!(fetched.consumed, 7);
        assert_eq!(fetched.bytes, b"ABCDEFG");
    }

    #[test]
    fn fetch_string_decodes() {
        let buf = ByteBuffer::from(&b"Harbour\x1f"[..]);
        assert_eq!(
            buf.fetch_string(20, UNIT_TERMINATOR, FIELD_TERMINATOR),
            (8, String::from("Harbour"))
        );
        let buf = ByteBuffer::from(&b"\xff\xfe\x1f"[..]);
        assert_eq!(
            buf.fetch_string(20, UNIT_TERMINATOR, FIELD_TERMINATOR),
            (3, String::new())
        );
    }

    #[test]
    fn field_as_string_splits_on_terminator() {
        let buf = ByteBuffer::from("DSID\u{1e}rest");
        assert_eq!(buf.field_as_string(&[FIELD_TERMINATOR]), "DSID");
        assert_eq!(buf.field_as_string(b"ID"), "DS");
        assert_eq!(buf.field_as_string(b"zz"), "DSID\u{1e}rest");
        assert_eq!(ByteBuffer::new().field_as_string(b"ID"), "");
    }
}
