//! Length-prefixed codecs for heap-allocated payloads.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{CodecError, Serializer, varint};

fn length_prefix(buf: &[u8]) -> Result<(usize, usize), CodecError> {
    let (len, n) = varint::unmarshal(buf)?;
    let len = usize::try_from(len).map_err(|_| CodecError::InvalidData {
        message: "length prefix overflows usize",
    })?;
    if buf.len() - n < len {
        // A hostile prefix can claim up to usize::MAX bytes; saturate rather
        // than overflow when reporting how many were needed.
        return Err(CodecError::UnexpectedEof {
            needed: len.saturating_add(n),
            available: buf.len(),
        });
    }
    Ok((len, n))
}

/// Codec for `String`: varint byte length, then the UTF-8 bytes.
///
/// ```
/// use tagcast::{Serializer, Str};
///
/// let text = String::from("hello world");
/// let mut buf = vec![0u8; Str.size(&text)];
/// Str.marshal(&text, &mut buf).unwrap();
///
/// let (decoded, n) = Str.unmarshal(&buf).unwrap();
/// assert_eq!(decoded, text);
/// assert_eq!(n, buf.len());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Str;

impl Serializer<String> for Str {
    fn size(&self, value: &String) -> usize {
        varint::len(value.len() as u64) + value.len()
    }

    fn marshal(&self, value: &String, buf: &mut [u8]) -> Result<usize, CodecError> {
        let bytes = value.as_bytes();
        let offset = varint::marshal(bytes.len() as u64, buf)?;
        if buf.len() - offset < bytes.len() {
            return Err(CodecError::BufferTooSmall {
                needed: offset + bytes.len(),
                available: buf.len(),
            });
        }
        buf[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(offset + bytes.len())
    }

    fn unmarshal(&self, buf: &[u8]) -> Result<(String, usize), CodecError> {
        let (len, offset) = length_prefix(buf)?;
        let s = core::str::from_utf8(&buf[offset..offset + len])
            .map_err(|_| CodecError::InvalidData {
                message: "invalid UTF-8",
            })?
            .into();
        Ok((s, offset + len))
    }

    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        let (len, offset) = length_prefix(buf)?;
        Ok(offset + len)
    }
}

/// Codec for `Vec<u8>`: varint byte length, then the bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteVec;

impl Serializer<Vec<u8>> for ByteVec {
    fn size(&self, value: &Vec<u8>) -> usize {
        varint::len(value.len() as u64) + value.len()
    }

    fn marshal(&self, value: &Vec<u8>, buf: &mut [u8]) -> Result<usize, CodecError> {
        let offset = varint::marshal(value.len() as u64, buf)?;
        if buf.len() - offset < value.len() {
            return Err(CodecError::BufferTooSmall {
                needed: offset + value.len(),
                available: buf.len(),
            });
        }
        buf[offset..offset + value.len()].copy_from_slice(value);
        Ok(offset + value.len())
    }

    fn unmarshal(&self, buf: &[u8]) -> Result<(Vec<u8>, usize), CodecError> {
        let (len, offset) = length_prefix(buf)?;
        Ok((buf[offset..offset + len].to_vec(), offset + len))
    }

    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        let (len, offset) = length_prefix(buf)?;
        Ok(offset + len)
    }
}
