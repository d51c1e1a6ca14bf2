use core::fmt;

use crate::Marker;

/// Error during marshaling or unmarshaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Destination buffer too small for the encoding.
    BufferTooSmall {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Input ended before a complete encoding could be read.
    UnexpectedEof {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Structurally invalid input.
    InvalidData {
        /// Error description.
        message: &'static str,
    },

    /// A well-formed marker was decoded, but it is not the one this
    /// serializer was built with.
    ///
    /// Carries both values so a dispatcher can route the bytes to a
    /// different serializer. The marker's own encoding is all that was
    /// consumed: exactly [`marker_len`](crate::marker_len)`(actual)` bytes.
    WrongMarker {
        /// The marker this serializer expects.
        expected: Marker,
        /// The marker found in the input.
        actual: Marker,
    },

    /// Custom error for user serializers.
    Custom {
        /// Error description.
        message: &'static str,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, available } => {
                write!(
                    f,
                    "buffer too small: needed {needed} bytes, only {available} available"
                )
            }
            Self::UnexpectedEof { needed, available } => {
                write!(
                    f,
                    "unexpected end of input: needed {needed} bytes, only {available} available"
                )
            }
            Self::InvalidData { message } => write!(f, "invalid data: {message}"),
            Self::WrongMarker { expected, actual } => {
                write!(f, "wrong marker: expected {expected}, found {actual}")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

// Rust 1.81+
impl core::error::Error for CodecError {}

/// Alias for results carrying a [`CodecError`].
pub type Result<T> = core::result::Result<T, CodecError>;
