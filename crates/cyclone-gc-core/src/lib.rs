//! Platform-agnostic client library for the cyclone-gc graphics
//! coprocessor.
//!
//! Encodes typed drawing requests into 4-7 byte tag-prefixed wire
//! commands and hands them to the gateway through any
//! [`cyclone_gc_hal::CommandChannel`]. The wire codec lives in
//! [`command`] and is shared with the gateway crate, which uses the
//! decode half.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod client;
pub mod command;
pub mod error;
pub mod sprite;

#[cfg(feature = "std")]
pub mod io;

pub use client::GcClient;
pub use command::{Instruction, InstructionKind, OverflowPolicy, PolygonShape};
pub use error::{ClientError, ProtocolError};
