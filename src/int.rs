//! Decimal fields. DDF leaders and directories store integers as fixed-width runs of
//! ASCII digits padded with leading zeros.

use crate::{
    buf::span,
    error::{DdfError, DdfResult},
};

/// Drops the `'0'` bytes at the front of `bytes`. Once a non-zero byte has been seen,
/// every following byte is kept, zeros included. All zeros strip to nothing.
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&byte| byte != b'0')
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Decodes the `size`-byte zero-padded decimal at `offset` of `bytes`.
///
/// A field of only zeros is the value 0. Anything other than digits after the padding
/// is a [`DdfError::MalformedInteger`].
pub fn get_integer(bytes: &[u8], offset: usize, size: usize) -> DdfResult<i64> {
    let range = span(bytes.len(), offset, size)?;
    let field = &bytes[range];
    let digits = strip_leading_zeros(field);
    parse_digits(digits, offset + (field.len() - digits.len()))
}

/// Parses a field that may be padded with spaces on either side and may carry a sign.
/// A blank field is the value 0.
pub(crate) fn parse_signed(field: &[u8], offset: usize) -> DdfResult<i64> {
    let start = field
        .iter()
        .position(|&byte| byte != b' ')
        .unwrap_or(field.len());
    let end = field
        .iter()
        .rposition(|&byte| byte != b' ')
        .map_or(start, |last| last + 1);
    let trimmed = &field[start..end];
    let (negative, digits, digits_offset) = match trimmed.split_first() {
        Some((b'-', rest)) => (true, rest, offset + start + 1),
        Some((b'+', rest)) => (false, rest, offset + start + 1),
        _ => (false, trimmed, offset + start),
    };
    if digits.is_empty() && !trimmed.is_empty() {
        // A lone sign
        return Err(malformed(offset + start, trimmed[0]));
    }
    let value = parse_digits(digits, digits_offset)?;
    Ok(if negative { -value } else { value })
}

fn parse_digits(digits: &[u8], offset: usize) -> DdfResult<i64> {
    let mut value: i64 = 0;
    for (i, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(malformed(offset + i, byte));
        }
        value = value
            .checked_mul(10)
            .and_then(|value| value.checked_add(i64::from(byte - b'0')))
            .ok_or_else(|| {
                debug_event!(offset, size = digits.len(), "integer field overflows i64");
                DdfError::IntegerOverflow {
                    offset,
                    size: digits.len(),
                }
            })?;
    }
    Ok(value)
}

fn malformed(offset: usize, byte: u8) -> DdfError {
    debug_event!(offset, byte, "non-digit byte in integer field");
    DdfError::MalformedInteger { offset, byte }
}
