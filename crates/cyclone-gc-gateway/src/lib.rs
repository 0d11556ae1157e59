//! Privileged gateway for the cyclone-gc graphics coprocessor.
//!
//! Receives raw wire commands from the channel transport, validates and
//! decodes them, reconstructs the opcode/data word pair, and pushes it
//! into the coprocessor's instruction FIFO through the four-step
//! register handshake. Owns all memory-mapped register access via
//! [`cyclone_gc_hal::RegisterBus`].

pub mod error;
pub mod gateway;
pub mod handshake;
pub mod mmio;

pub use error::GatewayError;
pub use gateway::Gateway;
pub use handshake::{Handshake, HandshakeConfig};
pub use mmio::MmioBus;
