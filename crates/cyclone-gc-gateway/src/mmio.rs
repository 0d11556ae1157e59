//! Volatile memory-mapped register bus.

use cyclone_gc_hal::RegisterBus;
use gc_registers::map;

/// Errors from the MMIO bus. Accesses themselves cannot fail once the
/// mapping exists; only out-of-aperture offsets are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmioError {
    /// Offset outside the mapped bridge aperture or not word-aligned.
    BadOffset { offset: usize },
}

impl core::fmt::Display for MmioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadOffset { offset } => write!(f, "bad register offset {offset:#X}"),
        }
    }
}

impl std::error::Error for MmioError {}

/// Register bus over a mapped lightweight-bridge aperture. Owns the
/// base pointer for its whole lifetime; construct one at gateway
/// startup and drop it at teardown, never a process-wide global.
pub struct MmioBus {
    base: *mut u32,
    span: usize,
}

// The bus is the single owner of the aperture; hardware registers are
// shared mutable state by nature, exclusive access is enforced by
// `&mut self` on the trait methods.
unsafe impl Send for MmioBus {}

impl MmioBus {
    /// Wrap a mapped aperture of `span` bytes starting at `base`.
    ///
    /// # Safety
    /// `base` must point at a live mapping of at least `span` bytes of
    /// the lightweight bridge (physical `map::LW_BRIDGE_BASE`), aligned
    /// to 4 bytes, and must remain valid for the lifetime of the bus.
    /// No other code may access the mapping while the bus exists.
    pub unsafe fn new(base: *mut u32, span: usize) -> Self {
        Self { base, span }
    }

    /// Wrap a mapped aperture of the default bridge span.
    ///
    /// # Safety
    /// Same contract as [`MmioBus::new`] with `map::LW_BRIDGE_SPAN`
    /// bytes.
    pub unsafe fn with_default_span(base: *mut u32) -> Self {
        Self::new(base, map::LW_BRIDGE_SPAN)
    }

    fn reg_ptr(&self, offset: usize) -> Result<*mut u32, MmioError> {
        if offset % 4 != 0 || offset + 4 > self.span {
            return Err(MmioError::BadOffset { offset });
        }
        // byte offset over a u32 base
        Ok(self.base.wrapping_byte_add(offset))
    }
}

impl RegisterBus for MmioBus {
    type Error = MmioError;

    fn write_reg(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        let ptr = self.reg_ptr(offset)?;
        unsafe { ptr.write_volatile(value) };
        Ok(())
    }

    fn read_reg(&mut self, offset: usize) -> Result<u32, Self::Error> {
        let ptr = self.reg_ptr(offset)?;
        Ok(unsafe { ptr.read_volatile() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_writes_hit_the_right_words() {
        // Back the bus with plain memory; volatile accesses behave the
        // same, minus the hardware side effects.
        let mut aperture = vec![0u32; map::LW_BRIDGE_SPAN / 4];
        let mut bus = unsafe { MmioBus::with_default_span(aperture.as_mut_ptr()) };

        bus.write_reg(map::OPCODE, 0xDEAD_BEEF).expect("write");
        bus.write_reg(map::DATA, 0x1234_5678).expect("write");
        assert_eq!(bus.read_reg(map::OPCODE).expect("read"), 0xDEAD_BEEF);
        assert_eq!(bus.read_reg(map::DATA).expect("read"), 0x1234_5678);

        drop(bus);
        assert_eq!(aperture[map::OPCODE / 4], 0xDEAD_BEEF);
        assert_eq!(aperture[map::DATA / 4], 0x1234_5678);
    }

    #[test]
    fn rejects_offsets_outside_the_aperture() {
        let mut aperture = vec![0u32; 4];
        let mut bus = unsafe { MmioBus::new(aperture.as_mut_ptr(), 16) };

        assert_eq!(
            bus.write_reg(16, 0),
            Err(MmioError::BadOffset { offset: 16 })
        );
        assert_eq!(bus.read_reg(2), Err(MmioError::BadOffset { offset: 2 }));
    }
}
