//! Instruction word bit-field types.
//!
//! Each word is a `u32` newtype with per-field `OFFSET`/`WIDTH`/`MASK`
//! constants and masked accessors. Setters silently truncate to the
//! declared field width; range validation happens at the wire codec
//! layer where it can be surfaced as an error.

pub mod opcode_word;
pub mod polygon_data;
pub mod rgb_data;
pub mod sprite_data;
