#![no_std]

/// Abstracts the byte-stream command channel between the client library
/// and the gateway (typically a character device node).
///
/// The channel is ordered, reliable, and single-writer; one `send` call
/// carries exactly one complete wire command and is never split.
pub trait CommandChannel {
    type Error: core::fmt::Debug;

    /// Deliver one complete wire command to the gateway.
    fn send(&mut self, command: &[u8]) -> Result<(), Self::Error>;
}

/// Abstracts the four memory-mapped handshake registers on the
/// coprocessor side.
///
/// Offsets are the byte offsets defined in `gc-registers::map`.
/// Implementations own the mapping; callers never touch raw pointers.
pub trait RegisterBus {
    type Error: core::fmt::Debug;

    /// Write a 32-bit value to the register at `offset`.
    fn write_reg(&mut self, offset: usize, value: u32) -> Result<(), Self::Error>;

    /// Read a 32-bit value from the register at `offset`.
    fn read_reg(&mut self, offset: usize) -> Result<u32, Self::Error>;
}
