//! Register bus backends for the daemon.

use std::convert::Infallible;

use cyclone_gc_hal::RegisterBus;
use gc_registers::map;

/// Logging stand-in for the real bridge. Every access goes to the log
/// at debug level; the full flag always reads clear. Useful for
/// protocol bring-up on machines without the FPGA.
#[derive(Default)]
pub struct TraceBus {
    writes: u64,
}

impl TraceBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegisterBus for TraceBus {
    type Error = Infallible;

    fn write_reg(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        self.writes += 1;
        log::debug!("reg write [{offset:#04X}] <- {value:#010X}");
        Ok(())
    }

    fn read_reg(&mut self, offset: usize) -> Result<u32, Self::Error> {
        log::debug!("reg read  [{offset:#04X}]");
        // No hardware behind us, so the FIFO can never fill up.
        let _ = offset == map::FIFO_FULL;
        Ok(0)
    }
}

// TODO: real backend: open /dev/mem, mmap LW_BRIDGE_SPAN bytes at
// LW_BRIDGE_BASE, and hand the mapping to
// cyclone_gc_gateway::MmioBus::with_default_span. Needs the memmap2
// crate and root (or a udev rule granting /dev/mem access).
