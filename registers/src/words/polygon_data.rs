//! Word: POLYGON_DATA

/// POLYGON_DATA
///
/// Data word payload of a draw-polygon instruction: reference X in
/// [8:0], reference Y in [17:9], size in [21:18], RGB channels in
/// [24:22]/[27:25]/[30:28], shape flag in [31] (0 = square,
/// 1 = triangle).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PolygonData(u32);

impl core::default::Default for PolygonData {
    fn default() -> Self {
        Self(0x0)
    }
}

impl PolygonData {
    pub const REF_X_OFFSET: usize = 0;
    pub const REF_X_WIDTH: usize = 9;
    pub const REF_X_MASK: u32 = 0x1FF;

    pub const REF_Y_OFFSET: usize = 9;
    pub const REF_Y_WIDTH: usize = 9;
    pub const REF_Y_MASK: u32 = 0x1FF;

    pub const SIZE_OFFSET: usize = 18;
    pub const SIZE_WIDTH: usize = 4;
    pub const SIZE_MASK: u32 = 0xF;

    pub const R_OFFSET: usize = 22;
    pub const R_WIDTH: usize = 3;
    pub const R_MASK: u32 = 0b111;

    pub const G_OFFSET: usize = 25;
    pub const G_WIDTH: usize = 3;
    pub const G_MASK: u32 = 0b111;

    pub const B_OFFSET: usize = 28;
    pub const B_WIDTH: usize = 3;
    pub const B_MASK: u32 = 0b111;

    pub const SHAPE_OFFSET: usize = 31;
    pub const SHAPE_WIDTH: usize = 1;
    pub const SHAPE_MASK: u32 = 0x1;

    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(ref_x: u16, ref_y: u16, size: u8, r: u8, g: u8, b: u8, shape: bool) -> Self {
        let mut word = Self::default();
        word.set_ref_x(ref_x);
        word.set_ref_y(ref_y);
        word.set_size(size);
        word.set_r(r);
        word.set_g(g);
        word.set_b(b);
        word.set_shape(shape);
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

    /// REF_X
    #[inline(always)]
    #[must_use]
    pub fn ref_x(&self) -> u16 {
        ((self.0 >> Self::REF_X_OFFSET) & Self::REF_X_MASK) as u16
    }

    /// REF_X
    #[inline(always)]
    pub fn set_ref_x(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::REF_X_MASK << Self::REF_X_OFFSET))
            | ((val & Self::REF_X_MASK) << Self::REF_X_OFFSET);
    }

    /// REF_Y
    #[inline(always)]
    #[must_use]
    pub fn ref_y(&self) -> u16 {
        ((self.0 >> Self::REF_Y_OFFSET) & Self::REF_Y_MASK) as u16
    }

    /// REF_Y
    #[inline(always)]
    pub fn set_ref_y(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::REF_Y_MASK << Self::REF_Y_OFFSET))
            | ((val & Self::REF_Y_MASK) << Self::REF_Y_OFFSET);
    }

    /// SIZE
    #[inline(always)]
    #[must_use]
    pub fn size(&self) -> u8 {
        ((self.0 >> Self::SIZE_OFFSET) & Self::SIZE_MASK) as u8
    }

    /// SIZE
    #[inline(always)]
    pub fn set_size(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SIZE_MASK << Self::SIZE_OFFSET))
            | ((val & Self::SIZE_MASK) << Self::SIZE_OFFSET);
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

    /// SHAPE
    #[inline(always)]
    #[must_use]
    pub fn shape(&self) -> bool {
        (self.0 >> Self::SHAPE_OFFSET) & Self::SHAPE_MASK != 0
    }

    /// SHAPE
    #[inline(always)]
    pub fn set_shape(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHAPE_MASK << Self::SHAPE_OFFSET))
            | ((val & Self::SHAPE_MASK) << Self::SHAPE_OFFSET);
    }
}

impl core::fmt::Debug for PolygonData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PolygonData")
            .field("ref_x", &self.ref_x())
            .field("ref_y", &self.ref_y())
            .field("size", &self.size())
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .field("shape", &self.shape())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let word = PolygonData::default();
        assert_eq!(word.ref_x(), 0);
        assert_eq!(word.ref_y(), 0);
        assert_eq!(word.size(), 0);
        assert!(!word.shape());
    }

    #[test]
    fn test_layout() {
        // rgb group sits in [30:22], shape at the top bit
        let word = PolygonData::new(320, 240, 5, 1, 2, 3, true);
        let rgb = 1u32 | (2 << 3) | (3 << 6);
        assert_eq!(
            word.to_raw(),
            320 | (240 << 9) | (5 << 18) | (rgb << 22) | (1 << 31)
        );
    }
}
