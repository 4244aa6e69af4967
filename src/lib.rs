#![no_std]
extern crate alloc;
#[macro_use]
mod log;
mod buf;
pub use buf::ByteBuffer;
pub mod error;
pub mod field;
pub use field::{FIELD_TERMINATOR, Fetched, UNIT_TERMINATOR};
pub mod int;
pub mod leader;
pub use leader::{InlineCodeExtension, InterchangeLevel};
pub mod text;
