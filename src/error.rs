use thiserror::Error;

pub type DdfResult<T> = Result<T, DdfError>;

#[derive(Debug, Clone, Error, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DdfError {
    #[error("Range {offset}..{end} is out of bounds for a buffer of {len} bytes.")]
    OutOfRange { offset: usize, end: usize, len: usize },
    #[error("Cursor position {position} is past the end of a buffer of {len} bytes.")]
    CursorOutOfRange { position: usize, len: usize },
    #[error("Found non-digit byte {byte:#04x} at offset {offset} while decoding an integer field.")]
    MalformedInteger { offset: usize, byte: u8 },
    #[error("Integer field of {size} bytes at offset {offset} does not fit in an i64.")]
    IntegerOverflow { offset: usize, size: usize },
    #[error("Found invalid byte {byte:#04x} at leader offset {offset}.")]
    InvalidLeaderByte { offset: usize, byte: u8 },
    #[error("Found invalid text starting at offset {offset}.")]
    InvalidText { offset: usize },
}
