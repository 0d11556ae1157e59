//! Instruction -> wire command serialization.

use gc_registers::{OpcodeWord, PolygonData, RgbData, SpriteData};

use super::{Instruction, WireCommand};
use crate::error::ProtocolError;

/// What to do with a parameter that exceeds its declared field width.
///
/// `Mask` truncates the way the hardware word fields themselves do;
/// `Reject` surfaces the overflow before any bytes are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Truncate to the field width.
    #[default]
    Mask,
    /// Fail with [`ProtocolError::FieldOverflow`].
    Reject,
}

impl OverflowPolicy {
    /// Apply the policy to one field value.
    fn apply(self, field: &'static str, value: u32, mask: u32) -> Result<u32, ProtocolError> {
        if value & !mask != 0 {
            if let Self::Reject = self {
                return Err(ProtocolError::FieldOverflow {
                    field,
                    value,
                    max: mask,
                });
            }
        }
        Ok(value & mask)
    }
}

const SPRITE_REG_MASK: u32 = (1 << OpcodeWord::SPRITE_REG_WIDTH) - 1;
const BLOCK_ADDR_MASK: u32 = (1 << OpcodeWord::BLOCK_ADDR_WIDTH) - 1;
const PIXEL_ADDR_MASK: u32 = (1 << OpcodeWord::PIXEL_ADDR_WIDTH) - 1;
const POLY_SLOT_MASK: u32 = (1 << OpcodeWord::POLY_SLOT_WIDTH) - 1;

impl Instruction {
    /// Serialize into the fixed-length wire form for this kind.
    ///
    /// # Errors
    /// `FieldOverflow` under [`OverflowPolicy::Reject`] when a
    /// parameter does not fit its declared width.
    pub fn encode(&self, policy: OverflowPolicy) -> Result<WireCommand, ProtocolError> {
        let mut buf = [0u8; super::wire::MAX_COMMAND_LEN];
        let kind = self.kind();
        buf[0] = kind.tag();

        match *self {
            Self::BackgroundColor { r, g, b } => {
                buf[1] = policy.apply("r", r as u32, RgbData::R_MASK)? as u8;
                buf[2] = policy.apply("g", g as u32, RgbData::G_MASK)? as u8;
                buf[3] = policy.apply("b", b as u32, RgbData::B_MASK)? as u8;
            }
            Self::SpritePlacement {
                reg,
                offset,
                x,
                y,
                enable,
            } => {
                let reg = policy.apply("reg", reg as u32, SPRITE_REG_MASK)?;
                let offset = policy.apply("offset", offset as u32, SpriteData::OFFSET_MASK)?;
                let x = policy.apply("x", x as u32, SpriteData::X_MASK)?;
                let y = policy.apply("y", y as u32, SpriteData::Y_MASK)?;
                buf[1] = reg as u8;
                buf[2] = (offset >> 1) as u8;
                buf[3] = (((offset & 0x1) << 7) | ((x >> 3) & 0x7F)) as u8;
                buf[4] = (((x & 0x7) << 5) | ((y >> 5) & 0x1F)) as u8;
                buf[5] = ((y & 0x1F) << 3) as u8;
                buf[6] = enable as u8;
            }
            Self::BackgroundBlock { address, r, g, b } => {
                let address = policy.apply("address", address as u32, BLOCK_ADDR_MASK)?;
                buf[1] = (address >> 5) as u8;
                buf[2] = (((address & 0x1F) << 3) as u8)
                    | policy.apply("r", r as u32, RgbData::R_MASK)? as u8;
                buf[3] = policy.apply("g", g as u32, RgbData::G_MASK)? as u8;
                buf[4] = policy.apply("b", b as u32, RgbData::B_MASK)? as u8;
            }
            Self::SpritePixel { address, r, g, b } => {
                let address = policy.apply("address", address as u32, PIXEL_ADDR_MASK)?;
                buf[1] = (address >> 6) as u8;
                buf[2] = (address & 0x3F) as u8;
                buf[3] = policy.apply("r", r as u32, RgbData::R_MASK)? as u8;
                buf[4] = policy.apply("g", g as u32, RgbData::G_MASK)? as u8;
                buf[5] = policy.apply("b", b as u32, RgbData::B_MASK)? as u8;
            }
            Self::Polygon {
                slot,
                ref_x,
                ref_y,
                size,
                r,
                g,
                b,
                shape,
            } => {
                let slot = policy.apply("slot", slot as u32, POLY_SLOT_MASK)?;
                let ref_x = policy.apply("ref_x", ref_x as u32, PolygonData::REF_X_MASK)?;
                let ref_y = policy.apply("ref_y", ref_y as u32, PolygonData::REF_Y_MASK)?;
                let size = policy.apply("size", size as u32, PolygonData::SIZE_MASK)?;
                let r = policy.apply("r", r as u32, PolygonData::R_MASK)?;
                let g = policy.apply("g", g as u32, PolygonData::G_MASK)?;
                let b = policy.apply("b", b as u32, PolygonData::B_MASK)?;
                buf[1] = slot as u8;
                buf[2] = (ref_x >> 1) as u8;
                buf[3] = (((ref_x & 0x1) << 7) | ((ref_y >> 2) & 0x7F)) as u8;
                buf[4] = (((ref_y & 0x3) << 6) | size) as u8;
                buf[5] = ((r << 5) | (g << 2)) as u8;
                buf[6] = ((b << 5) | shape.bit() as u32) as u8;
            }
        }

        let len = kind.wire_len();
        WireCommand::from_slice(&buf[..len]).map_err(|_| ProtocolError::InvalidLength { len })
    }
}
