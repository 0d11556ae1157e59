//! Word: SPRITE_DATA

/// SPRITE_DATA
///
/// Data word payload of a sprite placement: bitmap offset in [8:0],
/// screen Y in [18:9], screen X in [28:19], enable flag in [29].
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct SpriteData(u32);

impl core::default::Default for SpriteData {
    fn default() -> Self {
        Self(0x0)
    }
}

impl SpriteData {
    pub const OFFSET_OFFSET: usize = 0;
    pub const OFFSET_WIDTH: usize = 9;
    pub const OFFSET_MASK: u32 = 0x1FF;

    pub const Y_OFFSET: usize = 9;
    pub const Y_WIDTH: usize = 10;
    pub const Y_MASK: u32 = 0x3FF;

    pub const X_OFFSET: usize = 19;
    pub const X_WIDTH: usize = 10;
    pub const X_MASK: u32 = 0x3FF;

    pub const ENABLE_OFFSET: usize = 29;
    pub const ENABLE_WIDTH: usize = 1;
    pub const ENABLE_MASK: u32 = 0x1;

    #[must_use]
    pub fn new(offset: u16, x: u16, y: u16, enable: bool) -> Self {
        let mut word = Self::default();
        word.set_offset(offset);
        word.set_x(x);
        word.set_y(y);
        word.set_enable(enable);
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

    /// OFFSET (bitmap select)
    #[inline(always)]
    #[must_use]
    pub fn offset(&self) -> u16 {
        ((self.0 >> Self::OFFSET_OFFSET) & Self::OFFSET_MASK) as u16
    }

    /// OFFSET (bitmap select)
    #[inline(always)]
    pub fn set_offset(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::OFFSET_MASK << Self::OFFSET_OFFSET))
            | ((val & Self::OFFSET_MASK) << Self::OFFSET_OFFSET);
    }

    /// Y
    #[inline(always)]
    #[must_use]
    pub fn y(&self) -> u16 {
        ((self.0 >> Self::Y_OFFSET) & Self::Y_MASK) as u16
    }

    /// Y
    #[inline(always)]
    pub fn set_y(&mut self, val: u16) {
        let val = val as u32;
        self.0 =
            (self.0 & !(Self::Y_MASK << Self::Y_OFFSET)) | ((val & Self::Y_MASK) << Self::Y_OFFSET);
    }

    /// X
    #[inline(always)]
    #[must_use]
    pub fn x(&self) -> u16 {
        ((self.0 >> Self::X_OFFSET) & Self::X_MASK) as u16
    }

    /// X
    #[inline(always)]
    pub fn set_x(&mut self, val: u16) {
        let val = val as u32;
        self.0 =
            (self.0 & !(Self::X_MASK << Self::X_OFFSET)) | ((val & Self::X_MASK) << Self::X_OFFSET);
    }

    /// ENABLE
    #[inline(always)]
    #[must_use]
    pub fn enable(&self) -> bool {
        (self.0 >> Self::ENABLE_OFFSET) & Self::ENABLE_MASK != 0
    }

    /// ENABLE
    #[inline(always)]
    pub fn set_enable(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ENABLE_MASK << Self::ENABLE_OFFSET))
            | ((val & Self::ENABLE_MASK) << Self::ENABLE_OFFSET);
    }
}

impl core::fmt::Debug for SpriteData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpriteData")
            .field("offset", &self.offset())
            .field("y", &self.y())
            .field("x", &self.x())
            .field("enable", &self.enable())
            .finish()
    }
}
