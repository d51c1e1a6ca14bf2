//! The serializer capability trait.

use crate::CodecError;

/// A codec for values of type `T`, operating on caller-supplied buffers.
///
/// Implementors are plain values: a serializer is constructed once and then
/// shared freely, since none of the operations take `&mut self`. The four
/// operations must agree with each other: `marshal` writes exactly `size`
/// bytes, and `skip` consumes exactly the bytes `unmarshal` would.
///
/// # Example
///
/// ```
/// use tagcast::{CodecError, Serializer};
///
/// // A codec for u16 as two big-endian bytes.
/// struct BigEndianU16;
///
/// impl Serializer<u16> for BigEndianU16 {
///     fn size(&self, _value: &u16) -> usize {
///         2
///     }
///
///     fn marshal(&self, value: &u16, buf: &mut [u8]) -> Result<usize, CodecError> {
///         if buf.len() < 2 {
///             return Err(CodecError::BufferTooSmall { needed: 2, available: buf.len() });
///         }
///         buf[..2].copy_from_slice(&value.to_be_bytes());
///         Ok(2)
///     }
///
///     fn unmarshal(&self, buf: &[u8]) -> Result<(u16, usize), CodecError> {
///         match buf {
///             [hi, lo, ..] => Ok((u16::from_be_bytes([*hi, *lo]), 2)),
///             _ => Err(CodecError::UnexpectedEof { needed: 2, available: buf.len() }),
///         }
///     }
/// }
///
/// let mut buf = [0u8; 2];
/// BigEndianU16.marshal(&0x1234, &mut buf).unwrap();
/// assert_eq!(buf, [0x12, 0x34]);
/// ```
pub trait Serializer<T> {
    /// Exact encoded length of `value`.
    fn size(&self, value: &T) -> usize;

    /// Serialize `value` into the start of `buf`.
    ///
    /// Returns the number of bytes written, always equal to
    /// [`size`](Self::size). Trailing capacity in `buf` is left untouched.
    fn marshal(&self, value: &T, buf: &mut [u8]) -> Result<usize, CodecError>;

    /// Deserialize a value from the start of `buf`.
    ///
    /// Returns the value and the number of bytes consumed. Trailing bytes
    /// beyond one value's encoding are ignored and not counted.
    fn unmarshal(&self, buf: &[u8]) -> Result<(T, usize), CodecError>;

    /// Advance past one encoded value without producing it.
    ///
    /// Returns the number of bytes [`unmarshal`](Self::unmarshal) would have
    /// consumed, and fails wherever it would fail. The default decodes and
    /// discards; implementors can override when the encoding can be walked
    /// more cheaply.
    #[inline]
    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        self.unmarshal(buf).map(|(_, n)| n)
    }
}

// A shared reference to a serializer is itself a serializer, so one payload
// codec instance can back any number of tagged wrappers.
impl<T, S: Serializer<T> + ?Sized> Serializer<T> for &S {
    #[inline]
    fn size(&self, value: &T) -> usize {
        (**self).size(value)
    }

    #[inline]
    fn marshal(&self, value: &T, buf: &mut [u8]) -> Result<usize, CodecError> {
        (**self).marshal(value, buf)
    }

    #[inline]
    fn unmarshal(&self, buf: &[u8]) -> Result<(T, usize), CodecError> {
        (**self).unmarshal(buf)
    }

    #[inline]
    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        (**self).skip(buf)
    }
}
