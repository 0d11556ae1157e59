//! Word: OPCODE

use crate::class::InstrClass;

/// OPCODE
///
/// Written to the opcode register. Carries the 2-bit instruction class
/// in [1:0] and the target address in [17:4]; bits [3:2] are unused by
/// the hardware. The address field width that is actually meaningful
/// depends on the class: 4 bits for a sprite register, 12 for a
/// background block index, 14 for a sprite pixel index, 8 for a
/// polygon slot.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct OpcodeWord(u32);

impl core::default::Default for OpcodeWord {
    fn default() -> Self {
        Self(0x0)
    }
}

impl OpcodeWord {
    pub const CLASS_OFFSET: usize = 0;
    pub const CLASS_WIDTH: usize = 2;
    pub const CLASS_MASK: u32 = 0b11;

    pub const ADDR_OFFSET: usize = 4;
    pub const ADDR_WIDTH: usize = 14;
    pub const ADDR_MASK: u32 = 0x3FFF;

    /// Declared address width for a sprite placement (register index).
    pub const SPRITE_REG_WIDTH: usize = 4;
    /// Declared address width for a background block index.
    pub const BLOCK_ADDR_WIDTH: usize = 12;
    /// Declared address width for a sprite pixel index.
    pub const PIXEL_ADDR_WIDTH: usize = 14;
    /// Declared address width for a polygon slot.
    pub const POLY_SLOT_WIDTH: usize = 8;

    /// Build an opcode word from a class and a pre-masked address.
    #[must_use]
    pub fn new(class: InstrClass, addr: u32) -> Self {
        let mut word = Self::default();
        word.set_class(class);
        word.set_addr(addr);
        word
    }

    #[must_use]
    pub const fn from_raw(val: u32) -> Self {
        Self(val)
    }

    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// CLASS
    #[inline(always)]
    #[must_use]
    pub fn class(&self) -> InstrClass {
        InstrClass::from_bits((self.0 >> Self::CLASS_OFFSET) & Self::CLASS_MASK)
    }

    /// CLASS
    #[inline(always)]
    pub fn set_class(&mut self, val: InstrClass) {
        self.0 = (self.0 & !(Self::CLASS_MASK << Self::CLASS_OFFSET))
            | ((val.bits() & Self::CLASS_MASK) << Self::CLASS_OFFSET);
    }

    /// ADDR
    #[inline(always)]
    #[must_use]
    pub fn addr(&self) -> u32 {
        (self.0 >> Self::ADDR_OFFSET) & Self::ADDR_MASK
    }

    /// ADDR
    #[inline(always)]
    pub fn set_addr(&mut self, val: u32) {
        self.0 = (self.0 & !(Self::ADDR_MASK << Self::ADDR_OFFSET))
            | ((val & Self::ADDR_MASK) << Self::ADDR_OFFSET);
    }
}

impl core::fmt::Debug for OpcodeWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpcodeWord")
            .field("class", &self.class())
            .field("addr", &self.addr())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let word = OpcodeWord::default();
        assert_eq!(word.class(), InstrClass::Wbr);
        assert_eq!(word.addr(), 0);
    }

    #[test]
    fn test_layout() {
        let word = OpcodeWord::new(InstrClass::Wbm, 810);
        assert_eq!(word.to_raw(), (810 << 4) | 0b10);
    }
}
