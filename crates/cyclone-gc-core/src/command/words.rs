//! Instruction -> hardware word construction.

use gc_registers::{OpcodeWord, PolygonData, RgbData, SpriteData};

use super::Instruction;

impl Instruction {
    /// Build the `(opcode_word, data_word)` pair written to the
    /// hardware registers. Fields are truncated to their declared
    /// widths by the word types; range enforcement happens at encode
    /// time.
    #[must_use]
    pub fn words(&self) -> (u32, u32) {
        let kind = self.kind();
        match *self {
            Self::BackgroundColor { r, g, b } => (
                OpcodeWord::new(kind.class(), 0).to_raw(),
                RgbData::new(r, g, b).to_raw(),
            ),
            Self::SpritePlacement {
                reg,
                offset,
                x,
                y,
                enable,
            } => (
                OpcodeWord::new(kind.class(), reg as u32).to_raw(),
                SpriteData::new(offset, x, y, enable).to_raw(),
            ),
            Self::BackgroundBlock { address, r, g, b } => (
                OpcodeWord::new(kind.class(), address as u32).to_raw(),
                RgbData::new(r, g, b).to_raw(),
            ),
            Self::SpritePixel { address, r, g, b } => (
                OpcodeWord::new(kind.class(), address as u32).to_raw(),
                RgbData::new(r, g, b).to_raw(),
            ),
            Self::Polygon {
                slot,
                ref_x,
                ref_y,
                size,
                r,
                g,
                b,
                shape,
            } => (
                OpcodeWord::new(kind.class(), slot as u32).to_raw(),
                PolygonData::new(ref_x, ref_y, size, r, g, b, shape.bit() != 0).to_raw(),
            ),
        }
    }
}
