//! Wire command envelope.

/// Shortest valid wire command (background color).
pub const MIN_COMMAND_LEN: usize = 4;

/// Longest valid wire command (sprite placement, polygon).
pub const MAX_COMMAND_LEN: usize = 7;

/// One serialized instruction: tag byte plus packed fields. Created by
/// the encoder, consumed exactly once by the gateway decoder.
pub type WireCommand = heapless::Vec<u8, MAX_COMMAND_LEN>;
