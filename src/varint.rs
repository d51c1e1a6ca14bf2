//! Variable-length unsigned integer encoding (LEB128).
//!
//! Values are emitted as little-endian groups of seven bits, one group per
//! byte, with the high bit set on every byte except the last. Small values
//! take one byte; a full `u64` takes at most [`MAX_LEN`] bytes.
//!
//! This is the encoding used for the marker in front of every tagged value
//! (see [`Tagged`](crate::Tagged)), and it doubles as a payload codec for
//! integers via the [`Varint`] serializer.

use crate::{CodecError, Serializer};

/// Longest possible encoding of a `u64`: nine full groups plus one final bit.
pub const MAX_LEN: usize = 10;

/// Exact encoded length of `value`.
#[inline]
pub const fn len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (64 - value.leading_zeros() as usize).div_ceil(7)
    }
}

/// Encode `value` into the start of `buf`. Returns bytes written.
pub fn marshal(mut value: u64, buf: &mut [u8]) -> Result<usize, CodecError> {
    let needed = len(value);
    if buf.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }
    let mut i = 0;
    while value >= 0x80 {
        buf[i] = value as u8 | 0x80;
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    Ok(i + 1)
}

/// Decode a value from the start of `buf`. Returns the value and bytes
/// consumed.
///
/// Fails with `UnexpectedEof` if the buffer ends while a continuation bit is
/// still set, and with `InvalidData` if the encoding does not fit in 64 bits.
pub fn unmarshal(buf: &[u8]) -> Result<(u64, usize), CodecError> {
    let mut value = 0u64;
    for (i, &b) in buf.iter().enumerate() {
        // The tenth byte holds the single remaining bit of a u64.
        if i == MAX_LEN - 1 && b > 0x01 {
            return Err(CodecError::InvalidData {
                message: "varint overflows u64",
            });
        }
        if b < 0x80 {
            return Ok((value | u64::from(b) << (7 * i), i + 1));
        }
        value |= u64::from(b & 0x7f) << (7 * i);
    }
    Err(CodecError::UnexpectedEof {
        needed: buf.len() + 1,
        available: buf.len(),
    })
}

/// Advance past one encoded value without producing it.
///
/// Byte counts and errors agree exactly with [`unmarshal`] on every input.
pub fn skip(buf: &[u8]) -> Result<usize, CodecError> {
    for (i, &b) in buf.iter().enumerate() {
        if i == MAX_LEN - 1 && b > 0x01 {
            return Err(CodecError::InvalidData {
                message: "varint overflows u64",
            });
        }
        if b < 0x80 {
            return Ok(i + 1);
        }
    }
    Err(CodecError::UnexpectedEof {
        needed: buf.len() + 1,
        available: buf.len(),
    })
}

/// Varint codec as a payload serializer for unsigned integers.
///
/// ```
/// use tagcast::{Serializer, Varint};
///
/// let mut buf = [0u8; tagcast::varint::MAX_LEN];
/// let n = Varint.marshal(&300u64, &mut buf).unwrap();
/// assert_eq!(&buf[..n], &[0xac, 0x02]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Varint;

impl Serializer<u64> for Varint {
    #[inline]
    fn size(&self, value: &u64) -> usize {
        len(*value)
    }

    #[inline]
    fn marshal(&self, value: &u64, buf: &mut [u8]) -> Result<usize, CodecError> {
        marshal(*value, buf)
    }

    #[inline]
    fn unmarshal(&self, buf: &[u8]) -> Result<(u64, usize), CodecError> {
        unmarshal(buf)
    }

    #[inline]
    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        skip(buf)
    }
}

impl Serializer<u32> for Varint {
    #[inline]
    fn size(&self, value: &u32) -> usize {
        len(u64::from(*value))
    }

    #[inline]
    fn marshal(&self, value: &u32, buf: &mut [u8]) -> Result<usize, CodecError> {
        marshal(u64::from(*value), buf)
    }

    #[inline]
    fn unmarshal(&self, buf: &[u8]) -> Result<(u32, usize), CodecError> {
        let (value, n) = unmarshal(buf)?;
        let value = u32::try_from(value).map_err(|_| CodecError::InvalidData {
            message: "varint out of u32 range",
        })?;
        Ok((value, n))
    }

    // No skip override: the default decodes, keeping the u32 range check so
    // skip fails exactly where unmarshal does.
}
