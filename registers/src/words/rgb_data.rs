//! Word: RGB_DATA

/// RGB_DATA
///
/// Data word payload shared by the background color, background block,
/// and sprite pixel instructions: one 3-bit channel each for red,
/// green, and blue.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct RgbData(u32);

impl core::default::Default for RgbData {
    fn default() -> Self {
        Self(0x0)
    }
}

impl RgbData {
    pub const R_OFFSET: usize = 0;
    pub const R_WIDTH: usize = 3;
    pub const R_MASK: u32 = 0b111;

    pub const G_OFFSET: usize = 3;
    pub const G_WIDTH: usize = 3;
    pub const G_MASK: u32 = 0b111;

    pub const B_OFFSET: usize = 6;
    pub const B_WIDTH: usize = 3;
    pub const B_MASK: u32 = 0b111;

    /// Pack three channels into a data word.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let mut word = Self::default();
        word.set_r(r);
        word.set_g(g);
        word.set_b(b);
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

    /// R
    #[inline(always)]
    #[must_use]
    pub fn r(&self) -> u8 {
        ((self.0 >> Self::R_OFFSET) & Self::R_MASK) as u8
    }

    /// R
    #[inline(always)]
    pub fn set_r(&mut self, val: u8) {
        let val = val as u32;
        self.0 =
            (self.0 & !(Self::R_MASK << Self::R_OFFSET)) | ((val & Self::R_MASK) << Self::R_OFFSET);
    }

    /// G
    #[inline(always)]
    #[must_use]
    pub fn g(&self) -> u8 {
        ((self.0 >> Self::G_OFFSET) & Self::G_MASK) as u8
    }

    /// G
    #[inline(always)]
    pub fn set_g(&mut self, val: u8) {
        let val = val as u32;
        self.0 =
            (self.0 & !(Self::G_MASK << Self::G_OFFSET)) | ((val & Self::G_MASK) << Self::G_OFFSET);
    }

    /// B
    #[inline(always)]
    #[must_use]
    pub fn b(&self) -> u8 {
        ((self.0 >> Self::B_OFFSET) & Self::B_MASK) as u8
    }

    /// B
    #[inline(always)]
    pub fn set_b(&mut self, val: u8) {
        let val = val as u32;
        self.0 =
            (self.0 & !(Self::B_MASK << Self::B_OFFSET)) | ((val & Self::B_MASK) << Self::B_OFFSET);
    }
}

impl core::fmt::Debug for RgbData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RgbData")
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let word = RgbData::default();
        assert_eq!(word.r(), 0);
        assert_eq!(word.g(), 0);
        assert_eq!(word.b(), 0);
    }

    #[test]
    fn test_layout() {
        let word = RgbData::new(7, 5, 0);
        assert_eq!(word.to_raw(), 7 | (5 << 3));
    }

    #[test]
    fn test_set_truncates() {
        let mut word = RgbData::default();
        word.set_g(0xFF);
        assert_eq!(word.g(), 7);
        assert_eq!(word.r(), 0);
        assert_eq!(word.b(), 0);
    }
}
