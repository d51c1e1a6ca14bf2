//! Tagged serializer: a payload codec prefixed with a type marker.
//!
//! A byte stream carrying several unrelated types needs a way to say which
//! type comes next. [`Tagged`] wraps any [`Serializer`] with a fixed
//! [`Marker`]: marshaling writes the marker's varint encoding followed by the
//! payload, and unmarshaling decodes the marker, checks it against the one
//! the wrapper was built with, and only then hands the remaining bytes to the
//! payload codec.

use core::fmt;
use core::marker::PhantomData;

use crate::{CodecError, Serializer, varint};

/// Integer tag identifying which concrete type's payload follows.
///
/// Unique per type within an application's tag space; the mapping from
/// marker to type is the caller's convention, established by building one
/// [`Tagged`] instance per type.
pub type Marker = u64;

/// Encoded length of `marker` on the wire.
#[inline]
pub const fn marker_len(marker: Marker) -> usize {
    varint::len(marker)
}

/// Decode a marker from the start of `buf`, without checking it against
/// anything.
///
/// For dispatchers that peek at the marker to pick a serializer before
/// handing the remaining bytes to [`Tagged::unmarshal_data`]. Validation
/// against an expected value happens in [`Tagged::unmarshal`] and
/// [`Tagged::skip`], not here.
#[inline]
pub fn unmarshal_marker(buf: &[u8]) -> Result<(Marker, usize), CodecError> {
    varint::unmarshal(buf)
}

/// Advance past an encoded marker, discarding its value.
#[inline]
pub fn skip_marker(buf: &[u8]) -> Result<usize, CodecError> {
    varint::skip(buf)
}

/// A payload serializer bound to the marker announcing its type.
///
/// Immutable after construction and stateless, so instances can be shared
/// across threads whenever the payload serializer can. The payload serializer
/// may be held by reference (`&S` is itself a [`Serializer`]), letting one
/// codec instance back wrappers for several types.
///
/// # Example
///
/// ```
/// use tagcast::{CodecError, Serializer, Tagged, Varint};
///
/// const COUNTER: tagcast::Marker = 7;
/// let counter = Tagged::<u64, _>::new(COUNTER, Varint);
///
/// let mut buf = [0u8; 16];
/// let n = counter.marshal(&42, &mut buf).unwrap();
/// assert_eq!(n, counter.size(&42));
///
/// let (value, read) = counter.unmarshal(&buf[..n]).unwrap();
/// assert_eq!((value, read), (42, n));
///
/// // A different tag in front of the same payload is rejected before the
/// // payload is ever parsed.
/// let other = Tagged::<u64, _>::new(COUNTER + 1, Varint);
/// other.marshal(&42, &mut buf).unwrap();
/// assert_eq!(
///     counter.unmarshal(&buf[..n]),
///     Err(CodecError::WrongMarker { expected: COUNTER, actual: COUNTER + 1 }),
/// );
/// ```
pub struct Tagged<T, S> {
    marker: Marker,
    payload: S,
    _ty: PhantomData<fn() -> T>,
}

impl<T, S> Tagged<T, S> {
    /// Bind `marker` to a payload serializer for `T`.
    ///
    /// `payload` can be `()` for marker-only instances that never touch
    /// payload bytes (tag tables, tests of the marker layer).
    #[inline]
    pub const fn new(marker: Marker, payload: S) -> Self {
        Self {
            marker,
            payload,
            _ty: PhantomData,
        }
    }

    /// The marker this instance was built with.
    #[inline]
    pub const fn marker(&self) -> Marker {
        self.marker
    }
}

impl<T, S: Serializer<T>> Tagged<T, S> {
    /// Deserialize payload bytes alone.
    ///
    /// The caller has already consumed and validated the marker, e.g. via
    /// [`unmarshal_marker`]; `buf` starts at the payload. Delegates to the
    /// payload serializer verbatim.
    #[inline]
    pub fn unmarshal_data(&self, buf: &[u8]) -> Result<(T, usize), CodecError> {
        self.payload.unmarshal(buf)
    }

    /// Advance past payload bytes alone. Counterpart of
    /// [`unmarshal_data`](Self::unmarshal_data).
    #[inline]
    pub fn skip_data(&self, buf: &[u8]) -> Result<usize, CodecError> {
        self.payload.skip(buf)
    }

    #[inline]
    fn check_marker(&self, buf: &[u8]) -> Result<usize, CodecError> {
        let (actual, n) = unmarshal_marker(buf)?;
        if actual != self.marker {
            return Err(CodecError::WrongMarker {
                expected: self.marker,
                actual,
            });
        }
        Ok(n)
    }
}

impl<T, S: Serializer<T>> Serializer<T> for Tagged<T, S> {
    #[inline]
    fn size(&self, value: &T) -> usize {
        varint::len(self.marker) + self.payload.size(value)
    }

    fn marshal(&self, value: &T, buf: &mut [u8]) -> Result<usize, CodecError> {
        let n = varint::marshal(self.marker, buf)?;
        let written = self.payload.marshal(value, &mut buf[n..])?;
        Ok(n + written)
    }

    /// Decode the marker, check it, then decode the payload.
    ///
    /// A marker that decodes but differs from the bound one fails with
    /// [`CodecError::WrongMarker`] before any payload byte is looked at, so
    /// a caller can re-route the bytes knowing exactly
    /// [`marker_len`]`(actual)` of them were consumed.
    fn unmarshal(&self, buf: &[u8]) -> Result<(T, usize), CodecError> {
        let n = self.check_marker(buf)?;
        let (value, read) = self.unmarshal_data(&buf[n..])?;
        Ok((value, n + read))
    }

    /// Mirror of [`unmarshal`](Self::unmarshal) without producing the value;
    /// byte counts and errors agree with it on every input.
    fn skip(&self, buf: &[u8]) -> Result<usize, CodecError> {
        let n = self.check_marker(buf)?;
        let skipped = self.skip_data(&buf[n..])?;
        Ok(n + skipped)
    }
}

impl<T, S: Clone> Clone for Tagged<T, S> {
    fn clone(&self) -> Self {
        Self {
            marker: self.marker,
            payload: self.payload.clone(),
            _ty: PhantomData,
        }
    }
}

impl<T, S: Copy> Copy for Tagged<T, S> {}

impl<T, S: fmt::Debug> fmt::Debug for Tagged<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagged")
            .field("marker", &self.marker)
            .field("payload", &self.payload)
            .finish()
    }
}
