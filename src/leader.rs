//! The three leader bytes that identify a DDF record. Record length, base address and
//! the entry map are left to the caller.

use crate::{ByteBuffer, error::DdfError};

pub const INTERCHANGE_LEVEL_OFFSET: usize = 5;
pub const LEADER_IDENTIFIER_OFFSET: usize = 6;
pub const INLINE_CODE_EXTENSION_OFFSET: usize = 8;

pub const LEADER_IDENTIFIER: u8 = b'L';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum InterchangeLevel {
    One = b'1',
    Two = b'2',
    Three = b'3',
}

impl TryFrom<u8> for InterchangeLevel {
    type Error = DdfError;

    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            b'1' => InterchangeLevel::One,
            b'2' => InterchangeLevel::Two,
            b'3' => InterchangeLevel::Three,
            invalid => {
                return Err(DdfError::InvalidLeaderByte {
                    offset: INTERCHANGE_LEVEL_OFFSET,
                    byte: invalid,
                });
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum InlineCodeExtension {
    /// No extension
    Standard = b' ',
    Extended = b'1',
}

impl TryFrom<u8> for InlineCodeExtension {
    type Error = DdfError;

    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            b' ' => InlineCodeExtension::Standard,
            b'1' => InlineCodeExtension::Extended,
            invalid => {
                return Err(DdfError::InvalidLeaderByte {
                    offset: INLINE_CODE_EXTENSION_OFFSET,
                    byte: invalid,
                });
            }
        })
    }
}

impl ByteBuffer {
    fn leader_byte<T: TryFrom<u8, Error = DdfError>>(&self, offset: usize) -> Option<T> {
        self.as_bytes()
            .get(offset)
            .and_then(|&byte| T::try_from(byte).ok())
    }

    pub fn interchange_level(&self) -> Option<InterchangeLevel> {
        self.leader_byte(INTERCHANGE_LEVEL_OFFSET)
    }

    pub fn inline_code_extension(&self) -> Option<InlineCodeExtension> {
        self.leader_byte(INLINE_CODE_EXTENSION_OFFSET)
    }

    /// Checks that this buffer starts with a DDF leader: interchange level `'1'`-`'3'`,
    /// leader identifier `'L'` and inline code extension `' '` or `'1'`.
    pub fn is_valid_header(&self) -> bool {
        let valid = self.interchange_level().is_some()
            && self.as_bytes().get(LEADER_IDENTIFIER_OFFSET) == Some(&LEADER_IDENTIFIER)
            && self.inline_code_extension().is_some();
        if !valid {
            debug_event!(
                leader = ?self.as_bytes().get(..=INLINE_CODE_EXTENSION_OFFSET),
                "rejected record leader"
            );
        }
        valid
    }
}
