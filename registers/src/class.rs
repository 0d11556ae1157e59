//! Field Enum: INSTR_CLASS

/// 2-bit instruction class code carried in the low bits of the opcode
/// word.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrClass {
    /// Write bank register (background color, sprite placement)
    Wbr = 0b00,
    /// Write sprite memory (sprite pixel color)
    Wsm = 0b01,
    /// Write background memory (background block)
    Wbm = 0b10,
    /// Draw polygon
    Dp = 0b11,
}

impl InstrClass {
    /// Decode a bit pattern into a class variant. Total over the 2-bit
    /// domain; callers mask wider values first.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Self::Wbr,
            0b01 => Self::Wsm,
            0b10 => Self::Wbm,
            _ => Self::Dp,
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u32 {
        *self as u32
    }
}
