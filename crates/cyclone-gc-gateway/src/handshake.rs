//! The FIFO handshake state machine.
//!
//! One submission walks WAIT_READY -> LOAD -> PULSE: poll the full
//! flag until clear, load the opcode and data words, then pulse the
//! start signal to commit exactly one instruction. `submit` takes
//! `&mut self`, so two callers can never interleave their register
//! writes; shared use goes through a mutex around the whole gateway.

use std::num::NonZeroU32;
use std::time::Duration;

use cyclone_gc_hal::RegisterBus;
use gc_registers::map;

use crate::error::GatewayError;

/// Polling configuration for the FIFO-full wait.
#[derive(Debug, Clone, Copy)]
pub struct HandshakeConfig {
    /// Sleep between full-flag reads while the FIFO is full.
    pub backoff: Duration,
    /// Give up after this many full reads. `None` blocks forever.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            backoff: Duration::from_millis(130),
            max_attempts: None,
        }
    }
}

/// Owns the register bus and performs the write sequence.
pub struct Handshake<B: RegisterBus> {
    bus: B,
    config: HandshakeConfig,
}

impl<B: RegisterBus> Handshake<B> {
    pub fn new(bus: B, config: HandshakeConfig) -> Self {
        Self { bus, config }
    }

    /// Release the underlying register bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Push one instruction into the coprocessor FIFO. Blocks until
    /// the FIFO has room (or the attempt bound is hit), then performs
    /// the four-step write sequence. Successive calls reach the FIFO
    /// in call order.
    pub fn submit(&mut self, opcode_word: u32, data_word: u32) -> Result<(), GatewayError<B::Error>> {
        self.wait_ready()?;

        // LOAD: make sure no stray start level can commit a half-loaded
        // pair, then stage both words.
        self.bus.write_reg(map::START, 0).map_err(GatewayError::Bus)?;
        self.bus
            .write_reg(map::OPCODE, opcode_word)
            .map_err(GatewayError::Bus)?;
        self.bus
            .write_reg(map::DATA, data_word)
            .map_err(GatewayError::Bus)?;

        // PULSE: single-cycle start pulse commits the pair.
        self.bus.write_reg(map::START, 1).map_err(GatewayError::Bus)?;
        self.bus.write_reg(map::START, 0).map_err(GatewayError::Bus)?;

        Ok(())
    }

    /// WAIT_READY: poll the full flag until it reads clear.
    fn wait_ready(&mut self) -> Result<(), GatewayError<B::Error>> {
        let mut attempts: u32 = 0;
        loop {
            let full = self
                .bus
                .read_reg(map::FIFO_FULL)
                .map_err(GatewayError::Bus)?;
            if full == 0 {
                return Ok(());
            }

            attempts = attempts.saturating_add(1);
            if let Some(max) = self.config.max_attempts {
                if attempts >= max.get() {
                    log::warn!("instruction FIFO still full after {attempts} attempts, giving up");
                    return Err(GatewayError::QueueTimeout { attempts });
                }
            }
            std::thread::sleep(self.config.backoff);
        }
    }
}
