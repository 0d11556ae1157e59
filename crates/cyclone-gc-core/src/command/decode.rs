//! Wire command -> instruction reconstruction.
//!
//! The exact inverse of the encode layouts, bit for bit. Decode always
//! masks to the declared field widths; a foreign encoder that set
//! stray bits sees them dropped, never an error.

use super::{Instruction, InstructionKind, PolygonShape};
use crate::command::wire::{MAX_COMMAND_LEN, MIN_COMMAND_LEN};
use crate::error::ProtocolError;

impl Instruction {
    /// Parse one wire command.
    ///
    /// # Errors
    /// `InvalidLength` outside the 4-7 byte envelope or when the
    /// length does not match the tag's fixed length; `UnknownOpcode`
    /// for a tag byte outside 0-4.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let len = bytes.len();
        if !(MIN_COMMAND_LEN..=MAX_COMMAND_LEN).contains(&len) {
            return Err(ProtocolError::InvalidLength { len });
        }

        let tag = bytes[0];
        let kind = InstructionKind::from_tag(tag).ok_or(ProtocolError::UnknownOpcode { tag })?;
        if len != kind.wire_len() {
            return Err(ProtocolError::InvalidLength { len });
        }

        Ok(match kind {
            InstructionKind::BackgroundColor => Self::BackgroundColor {
                r: bytes[1] & 0x7,
                g: bytes[2] & 0x7,
                b: bytes[3] & 0x7,
            },
            InstructionKind::SpritePlacement => Self::SpritePlacement {
                reg: bytes[1] & 0xF,
                offset: (((bytes[2] as u16) << 1) & 0x1FE) | ((bytes[3] as u16 >> 7) & 0x1),
                x: (((bytes[3] as u16) << 3) & 0x3F8) | ((bytes[4] as u16 >> 5) & 0x7),
                y: (((bytes[4] as u16) << 5) & 0x3E0) | ((bytes[5] as u16 >> 3) & 0x1F),
                enable: bytes[6] != 0,
            },
            InstructionKind::BackgroundBlock => Self::BackgroundBlock {
                address: (((bytes[1] as u16) << 5) | (bytes[2] as u16 >> 3)) & 0xFFF,
                r: bytes[2] & 0x7,
                g: bytes[3] & 0x7,
                b: bytes[4] & 0x7,
            },
            InstructionKind::SpritePixel => Self::SpritePixel {
                address: (((bytes[1] as u16) << 6) | (bytes[2] as u16 & 0x3F)) & 0x3FFF,
                r: bytes[3] & 0x7,
                g: bytes[4] & 0x7,
                b: bytes[5] & 0x7,
            },
            InstructionKind::Polygon => Self::Polygon {
                slot: bytes[1],
                ref_x: (((bytes[2] as u16) << 1) | (bytes[3] as u16 >> 7)) & 0x1FF,
                ref_y: (((bytes[3] as u16 & 0x7F) << 2) | (bytes[4] as u16 >> 6)) & 0x1FF,
                size: bytes[4] & 0xF,
                r: bytes[5] >> 5,
                g: (bytes[5] >> 2) & 0x7,
                b: bytes[6] >> 5,
                shape: PolygonShape::from_bit(bytes[6] & 0x1),
            },
        })
    }
}
