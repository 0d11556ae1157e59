//! Gateway error type, generic over register bus errors.

use cyclone_gc_core::error::ProtocolError;

#[derive(Debug)]
pub enum GatewayError<E: core::fmt::Debug> {
    /// The wire command was rejected before touching hardware.
    Protocol(ProtocolError),
    /// A register access failed.
    Bus(E),
    /// The FIFO-full flag never cleared within the configured attempt
    /// bound.
    QueueTimeout { attempts: u32 },
}

impl<E: core::fmt::Debug> From<ProtocolError> for GatewayError<E> {
    fn from(e: ProtocolError) -> Self {
        GatewayError::Protocol(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for GatewayError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Protocol(e) => write!(f, "rejected command: {e}"),
            Self::Bus(e) => write!(f, "register bus error: {e:?}"),
            Self::QueueTimeout { attempts } => {
                write!(f, "instruction FIFO still full after {attempts} attempts")
            }
        }
    }
}

impl<E: core::fmt::Debug> std::error::Error for GatewayError<E> {}
