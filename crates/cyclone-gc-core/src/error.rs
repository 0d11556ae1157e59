//! Error types for the wire codec and the drawing client.

/// A malformed or out-of-range wire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Command outside the 4-7 byte envelope, or its length does not
    /// match the length fixed by its tag.
    InvalidLength { len: usize },
    /// Tag byte does not name any instruction kind.
    UnknownOpcode { tag: u8 },
    /// A parameter exceeds its declared field width (only under
    /// [`crate::command::OverflowPolicy::Reject`]).
    FieldOverflow {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(f, "invalid command length {len}"),
            Self::UnknownOpcode { tag } => write!(f, "unknown opcode tag {tag}"),
            Self::FieldOverflow { field, value, max } => {
                write!(f, "field {field} overflow: {value} exceeds {max}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

/// Error type for client drawing operations, generic over channel
/// errors.
#[derive(Debug)]
pub enum ClientError<E: core::fmt::Debug> {
    /// The request could not be encoded.
    Protocol(ProtocolError),
    /// The command channel could not be written.
    Channel(E),
}

impl<E: core::fmt::Debug> From<ProtocolError> for ClientError<E> {
    fn from(e: ProtocolError) -> Self {
        ClientError::Protocol(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for ClientError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Protocol(e) => write!(f, "protocol error: {e}"),
            Self::Channel(e) => write!(f, "channel error: {e:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ClientError<E> {}
