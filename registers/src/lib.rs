//! Register map and instruction word definitions for the cyclone-gc
//! graphics coprocessor.
//!
//! Single source of truth for the bit-level layout of the two 32-bit
//! words the gateway writes into the coprocessor's instruction FIFO,
//! and for the byte offsets of the memory-mapped handshake registers
//! on the lightweight HPS-to-FPGA bridge.
#![no_std]

pub mod class;
pub mod map;
pub mod words;

pub use class::InstrClass;
pub use words::opcode_word::OpcodeWord;
pub use words::polygon_data::PolygonData;
pub use words::rgb_data::RgbData;
pub use words::sprite_data::SpriteData;
