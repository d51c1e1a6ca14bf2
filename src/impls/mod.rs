//! Ready-made payload serializers.
//!
//! [`Tagged`](crate::Tagged) accepts any [`Serializer`]; this module supplies
//! codecs for common shapes so simple payloads don't need a hand-written one.

#[cfg(feature = "alloc")]
pub mod alloc;

use crate::{CodecError, Serializer};

/// Fixed-width codec for plain-old-data types, via zerocopy.
///
/// Encodes a value as its in-memory bytes, `size_of::<T>()` wide. Works for
/// any type implementing zerocopy's conversion traits: the integer and float
/// primitives out of the box, and `#[repr(C)]` structs through zerocopy's
/// derives. zerocopy stays an internal detail; users only see [`Serializer`].
///
/// Multi-byte integers land in native byte order; use zerocopy's
/// `byteorder` wrapper types for a layout that is stable across platforms.
///
/// ```
/// use tagcast::{Raw, Serializer};
///
/// let mut buf = [0u8; 4];
/// let n = Raw.marshal(&0xdeadbeefu32, &mut buf).unwrap();
/// assert_eq!(n, 4);
///
/// let (value, _): (u32, _) = Raw.unmarshal(&buf).unwrap();
/// assert_eq!(value, 0xdeadbeefu32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raw;

impl<T> Serializer<T> for Raw
where
    T: zerocopy::IntoBytes + zerocopy::FromBytes + zerocopy::Immutable + zerocopy::KnownLayout,
{
    #[inline]
    fn size(&self, _value: &T) -> usize {
        size_of::<T>()
    }

    fn marshal(&self, value: &T, buf: &mut [u8]) -> Result<usize, CodecError> {
        let bytes = zerocopy::IntoBytes::as_bytes(value);
        if buf.len() < bytes.len() {
            return Err(CodecError::BufferTooSmall {
                needed: bytes.len(),
                available: buf.len(),
            });
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    fn unmarshal(&self, buf: &[u8]) -> Result<(T, usize), CodecError> {
        let len = size_of::<T>();
        if buf.len() < len {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                available: buf.len(),
            });
        }
        let value = zerocopy::FromBytes::read_from_bytes(&buf[..len]).map_err(|_| {
            CodecError::InvalidData {
                message: "zerocopy read failed",
            }
        })?;
        Ok((value, len))
    }

    #[inline]
    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        let len = size_of::<T>();
        if buf.len() < len {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                available: buf.len(),
            });
        }
        Ok(len)
    }
}
