//! Client-side sprite bookkeeping: movement and collision helpers.
//!
//! Nothing here touches the protocol; a sprite is placed on screen by
//! re-sending a sprite placement instruction with its current state
//! (see [`crate::client::GcClient::move_sprite`]).

/// 8-way compass movement direction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left = 0,
    UpperRight = 1,
    Up = 2,
    UpperLeft = 3,
    Right = 4,
    BottomLeft = 5,
    Down = 6,
    BottomRight = 7,
}

impl Direction {
    /// Per-axis movement signs, screen coordinates (y grows downward).
    #[must_use]
    pub const fn signs(&self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::UpperRight => (1, -1),
            Self::UpperLeft => (-1, -1),
            Self::BottomLeft => (-1, 1),
            Self::BottomRight => (1, 1),
        }
    }
}

/// Half-extent of the fixed collision box around a sprite's position.
pub const COLLISION_EXTENT: i32 = 20;

/// A movable sprite owned by client code. The gateway never sees this
/// type; only placement instructions derived from it.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    /// Screen position of the sprite.
    pub pos_x: i32,
    pub pos_y: i32,
    /// Movement direction applied by [`Sprite::step`].
    pub direction: Direction,
    /// Pixels moved per step, per axis.
    pub step_x: i32,
    pub step_y: i32,
    /// Bitmap select offset in sprite memory.
    pub offset: u16,
    /// Hardware data register holding this sprite.
    pub data_register: u8,
    /// Whether the sprite is drawn.
    pub enable: bool,
    /// Set by client code when a collision was detected.
    pub collided: bool,
}

impl Sprite {
    /// Advance the position one step along the current direction.
    pub fn step(&mut self) {
        let (sx, sy) = self.direction.signs();
        self.pos_x += sx * self.step_x;
        self.pos_y += sy * self.step_y;
    }

    /// Axis-aligned box overlap test against another sprite, using the
    /// fixed collision extent.
    #[must_use]
    pub fn collides_with(&self, other: &Sprite) -> bool {
        let self_right = self.pos_x + COLLISION_EXTENT;
        let self_bottom = self.pos_y - COLLISION_EXTENT;
        let other_right = other.pos_x + COLLISION_EXTENT;
        let other_bottom = other.pos_y - COLLISION_EXTENT;

        if self.pos_x >= other_right || other.pos_x >= self_right {
            return false;
        }
        if self.pos_y <= other_bottom || other.pos_y <= self_bottom {
            return false;
        }
        true
    }
}
