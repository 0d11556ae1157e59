//! The instruction model and wire codec.
//!
//! An [`Instruction`] is the typed form of one drawing request; its
//! serialized form is a tag-prefixed [`wire::WireCommand`] of 4-7
//! bytes. Encode and decode are exact mutual inverses for every value
//! within the declared field widths, and [`Instruction::words`]
//! produces the two 32-bit values the gateway writes to hardware.

pub mod decode;
pub mod encode;
pub mod wire;
pub mod words;

pub use encode::OverflowPolicy;
pub use wire::{WireCommand, MAX_COMMAND_LEN, MIN_COMMAND_LEN};

use gc_registers::InstrClass;

/// One of the five instruction kinds, keyed by the wire tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    /// Tag 0: set the base background color.
    BackgroundColor,
    /// Tag 1: place a sprite from a data register.
    SpritePlacement,
    /// Tag 2: color one 8x8 background block.
    BackgroundBlock,
    /// Tag 3: color one pixel of a stored sprite bitmap.
    SpritePixel,
    /// Tag 4: draw a polygon from a slot.
    Polygon,
}

impl InstructionKind {
    /// Look up a kind by its wire tag. `None` for an unknown tag.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::BackgroundColor),
            1 => Some(Self::SpritePlacement),
            2 => Some(Self::BackgroundBlock),
            3 => Some(Self::SpritePixel),
            4 => Some(Self::Polygon),
            _ => None,
        }
    }

    /// The tag byte that selects this kind on the wire.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            Self::BackgroundColor => 0,
            Self::SpritePlacement => 1,
            Self::BackgroundBlock => 2,
            Self::SpritePixel => 3,
            Self::Polygon => 4,
        }
    }

    /// Fixed wire command length for this kind, tag byte included.
    #[must_use]
    pub const fn wire_len(&self) -> usize {
        match self {
            Self::BackgroundColor => 4,
            Self::BackgroundBlock => 5,
            Self::SpritePixel => 6,
            Self::SpritePlacement | Self::Polygon => 7,
        }
    }

    /// Instruction class code carried in the opcode word.
    #[must_use]
    pub const fn class(&self) -> InstrClass {
        match self {
            Self::BackgroundColor | Self::SpritePlacement => InstrClass::Wbr,
            Self::SpritePixel => InstrClass::Wsm,
            Self::BackgroundBlock => InstrClass::Wbm,
            Self::Polygon => InstrClass::Dp,
        }
    }
}

/// Polygon outline selected by the shape flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonShape {
    Square,
    Triangle,
}

impl PolygonShape {
    #[must_use]
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 {
            Self::Square
        } else {
            Self::Triangle
        }
    }

    #[must_use]
    pub const fn bit(&self) -> u8 {
        match self {
            Self::Square => 0,
            Self::Triangle => 1,
        }
    }
}

/// A typed drawing request. Internally constructed instructions can
/// never carry an unknown tag; that state exists only for raw bytes at
/// the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Set the base background color (RGB channels 0-7).
    BackgroundColor { r: u8, g: u8, b: u8 },
    /// Place the sprite held in data register `reg` at (`x`, `y`),
    /// selecting its bitmap with `offset`.
    SpritePlacement {
        reg: u8,
        offset: u16,
        x: u16,
        y: u16,
        enable: bool,
    },
    /// Color the 8x8 background block at `address` (column + line * 80).
    BackgroundBlock { address: u16, r: u8, g: u8, b: u8 },
    /// Color one pixel of sprite memory at `address`.
    SpritePixel { address: u16, r: u8, g: u8, b: u8 },
    /// Draw a polygon from `slot`, centered at (`ref_x`, `ref_y`).
    Polygon {
        slot: u8,
        ref_x: u16,
        ref_y: u16,
        size: u8,
        r: u8,
        g: u8,
        b: u8,
        shape: PolygonShape,
    },
}

impl Instruction {
    /// The kind of this instruction.
    #[must_use]
    pub const fn kind(&self) -> InstructionKind {
        match self {
            Self::BackgroundColor { .. } => InstructionKind::BackgroundColor,
            Self::SpritePlacement { .. } => InstructionKind::SpritePlacement,
            Self::BackgroundBlock { .. } => InstructionKind::BackgroundBlock,
            Self::SpritePixel { .. } => InstructionKind::SpritePixel,
            Self::Polygon { .. } => InstructionKind::Polygon,
        }
    }
}
