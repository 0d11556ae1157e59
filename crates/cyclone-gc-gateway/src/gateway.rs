//! Decode-and-dispatch front end of the gateway.

use cyclone_gc_core::command::Instruction;
use cyclone_gc_hal::RegisterBus;

use crate::error::GatewayError;
use crate::handshake::{Handshake, HandshakeConfig};

/// Validates incoming wire commands and forwards the reconstructed
/// word pair to the handshake. One gateway instance per device; wrap
/// in a `Mutex` if multiple writers must share it.
pub struct Gateway<B: RegisterBus> {
    handshake: Handshake<B>,
}

impl<B: RegisterBus> Gateway<B> {
    pub fn new(bus: B, config: HandshakeConfig) -> Self {
        Self {
            handshake: Handshake::new(bus, config),
        }
    }

    /// Handle one wire command: validate, decode, dispatch.
    ///
    /// Malformed commands are rejected before any register access; the
    /// instruction is dropped and no hardware state changes.
    pub fn handle(&mut self, bytes: &[u8]) -> Result<(), GatewayError<B::Error>> {
        let instruction = match Instruction::decode(bytes) {
            Ok(instruction) => instruction,
            Err(e) => {
                log::warn!("rejected command ({} bytes): {e}", bytes.len());
                return Err(e.into());
            }
        };

        let (opcode_word, data_word) = instruction.words();
        log::trace!(
            "dispatch {:?}: opcode={opcode_word:#010X} data={data_word:#010X}",
            instruction.kind()
        );
        self.handshake.submit(opcode_word, data_word)
    }

    /// Tear down the gateway and release the register bus.
    pub fn into_bus(self) -> B {
        self.handshake.into_bus()
    }
}
