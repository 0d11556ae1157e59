//! Drawing client, generic over the command channel.

use cyclone_gc_hal::CommandChannel;

use crate::command::{Instruction, OverflowPolicy, PolygonShape};
use crate::error::ClientError;
use crate::sprite::Sprite;

/// Background block grid width.
pub const BLOCK_COLUMNS: u8 = 80;
/// Background block grid height.
pub const BLOCK_LINES: u8 = 60;
/// Polygon slots cleared by [`GcClient::clear_polygons`].
pub const POLYGON_SLOTS: u8 = 15;
/// Sprite data registers, bounded by the 4-bit opcode address field.
pub const SPRITE_REGISTERS: u8 = 16;

/// Block RGB value that makes a block copy the base background color
/// instead of holding its own.
const BLOCK_PASSTHROUGH: (u8, u8, u8) = (6, 7, 7);

/// High-level drawing interface. Owns a channel to the gateway and
/// encodes one wire command per operation.
pub struct GcClient<C: CommandChannel> {
    channel: C,
    policy: OverflowPolicy,
}

impl<C: CommandChannel> GcClient<C> {
    /// Create a client with the default (masking) overflow policy.
    pub fn new(channel: C) -> Self {
        Self::with_policy(channel, OverflowPolicy::default())
    }

    /// Create a client with an explicit overflow policy.
    pub fn with_policy(channel: C, policy: OverflowPolicy) -> Self {
        Self { channel, policy }
    }

    /// Release the underlying channel.
    pub fn into_channel(self) -> C {
        self.channel
    }

    fn send(&mut self, instruction: &Instruction) -> Result<(), ClientError<C::Error>> {
        let command = instruction.encode(self.policy)?;
        self.channel.send(&command).map_err(ClientError::Channel)
    }

    /// Set the base background color. Channels range 0-7.
    pub fn set_background_color(
        &mut self,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), ClientError<C::Error>> {
        self.send(&Instruction::BackgroundColor { r, g, b })
    }

    /// Color the 8x8 background block at (`column`, `line`).
    pub fn set_background_block(
        &mut self,
        column: u8,
        line: u8,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), ClientError<C::Error>> {
        let address = column as u16 + line as u16 * BLOCK_COLUMNS as u16;
        self.send(&Instruction::BackgroundBlock { address, r, g, b })
    }

    /// Place the sprite held in data register `reg` at (`x`, `y`).
    pub fn set_sprite(
        &mut self,
        reg: u8,
        x: u16,
        y: u16,
        offset: u16,
        enable: bool,
    ) -> Result<(), ClientError<C::Error>> {
        self.send(&Instruction::SpritePlacement {
            reg,
            offset,
            x,
            y,
            enable,
        })
    }

    /// Color one pixel of sprite memory.
    pub fn set_sprite_pixel(
        &mut self,
        address: u16,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), ClientError<C::Error>> {
        self.send(&Instruction::SpritePixel { address, r, g, b })
    }

    /// Draw a polygon from `slot`, centered at (`ref_x`, `ref_y`).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_polygon(
        &mut self,
        slot: u8,
        ref_x: u16,
        ref_y: u16,
        size: u8,
        r: u8,
        g: u8,
        b: u8,
        shape: PolygonShape,
    ) -> Result<(), ClientError<C::Error>> {
        self.send(&Instruction::Polygon {
            slot,
            ref_x,
            ref_y,
            size,
            r,
            g,
            b,
            shape,
        })
    }

    /// Advance a sprite one movement step and re-place it on screen.
    /// Positions wrap into the 10-bit coordinate fields.
    pub fn move_sprite(&mut self, sprite: &mut Sprite) -> Result<(), ClientError<C::Error>> {
        sprite.step();
        self.set_sprite(
            sprite.data_register,
            sprite.pos_x as u16,
            sprite.pos_y as u16,
            sprite.offset,
            sprite.enable,
        )
    }

    /// Reset every background block to the pass-through color so the
    /// base background shows everywhere.
    pub fn clear_background_blocks(&mut self) -> Result<(), ClientError<C::Error>> {
        let (r, g, b) = BLOCK_PASSTHROUGH;
        for line in 0..BLOCK_LINES {
            for column in 0..BLOCK_COLUMNS {
                self.set_background_block(column, line, r, g, b)?;
            }
        }
        Ok(())
    }

    /// Fill every background block from `line` to the bottom of the
    /// screen with one color.
    pub fn fill_background_blocks(
        &mut self,
        line: u8,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<(), ClientError<C::Error>> {
        for line in line..BLOCK_LINES {
            for column in 0..BLOCK_COLUMNS {
                self.set_background_block(column, line, r, g, b)?;
            }
        }
        Ok(())
    }

    /// Deactivate every polygon slot by drawing it with size zero.
    pub fn clear_polygons(&mut self) -> Result<(), ClientError<C::Error>> {
        for slot in 0..POLYGON_SLOTS {
            self.draw_polygon(slot, 0, 0, 0, 0, 0, 0, PolygonShape::Square)?;
        }
        Ok(())
    }

    /// Disable every sprite register above zero.
    pub fn clear_sprites(&mut self) -> Result<(), ClientError<C::Error>> {
        for reg in 1..SPRITE_REGISTERS {
            self.set_sprite(reg, 0, 0, 0, false)?;
        }
        Ok(())
    }
}
