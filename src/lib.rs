//! Type-tagged wrappers for byte serializers.
//!
//! A stream carrying values of several unrelated types needs to say which
//! type comes next before the bytes can be decoded. [`Tagged`] solves this by
//! binding a [`Marker`] (a small integer identifying one concrete type) to
//! any payload [`Serializer`]: every encoded value becomes
//! `marker bytes || payload bytes`, and decoding checks the marker before the
//! payload codec ever runs.
//!
//! # Tagged round-trip
//!
//! ```
//! use tagcast::{Serializer, Tagged, Varint};
//!
//! const TEMPERATURE: tagcast::Marker = 1;
//! let temperature = Tagged::<u64, _>::new(TEMPERATURE, Varint);
//!
//! let mut buf = [0u8; 16];
//! let n = temperature.marshal(&21, &mut buf).unwrap();
//! assert_eq!(n, temperature.size(&21));
//!
//! let (value, read) = temperature.unmarshal(&buf[..n]).unwrap();
//! assert_eq!((value, read), (21, n));
//! ```
//!
//! # Dispatching on the marker
//!
//! A reader that does not know the type up front peeks at the marker first,
//! then hands the remaining bytes to the matching wrapper's data-only
//! operations:
//!
//! ```
//! use tagcast::{Serializer, Tagged, Varint, unmarshal_marker};
//!
//! const WIDTH: tagcast::Marker = 1;
//! const HEIGHT: tagcast::Marker = 2;
//! let width = Tagged::<u64, _>::new(WIDTH, Varint);
//! let height = Tagged::<u64, _>::new(HEIGHT, Varint);
//!
//! let mut buf = [0u8; 16];
//! let n = height.marshal(&768, &mut buf).unwrap();
//!
//! let (marker, consumed) = unmarshal_marker(&buf[..n]).unwrap();
//! let value = match marker {
//!     WIDTH => width.unmarshal_data(&buf[consumed..n]).unwrap().0,
//!     HEIGHT => height.unmarshal_data(&buf[consumed..n]).unwrap().0,
//!     _ => unreachable!(),
//! };
//! assert_eq!(value, 768);
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod impls;
mod tagged;
mod traits;
pub mod varint;

pub use error::{CodecError, Result};
pub use impls::Raw;
#[cfg(feature = "alloc")]
pub use impls::alloc::{ByteVec, Str};
pub use tagged::{Marker, Tagged, marker_len, skip_marker, unmarshal_marker};
pub use traits::Serializer;
pub use varint::Varint;

#[cfg(test)]
mod tests;
