//! Byte offsets of the handshake registers on the lightweight bridge.
//!
//! All four registers are 32 bits wide. Offsets are relative to the
//! mapped bridge base, not absolute physical addresses.

/// Physical base address of the lightweight HPS-to-FPGA bridge.
pub const LW_BRIDGE_BASE: usize = 0xFF20_0000;

/// Size of the lightweight bridge aperture to map.
pub const LW_BRIDGE_SPAN: usize = 0x0000_5000;

/// Opcode word register (instruction class + target address).
pub const OPCODE: usize = 0x80;

/// Data word register (instruction payload).
pub const DATA: usize = 0x70;

/// Start signal register. A 0 -> 1 -> 0 pulse commits the loaded
/// opcode/data pair into the instruction FIFO.
pub const START: usize = 0xC0;

/// FIFO-full flag register (read-only). Nonzero while the instruction
/// FIFO cannot accept a new entry.
pub const FIFO_FULL: usize = 0xB0;
