//! Generic entry points.
//!
//! The codec for a type is whichever [`ToBytes`] / [`FromBytes`] impl the
//! compiler resolves for it, so category selection happens once, at build
//! time. A type with no impl does not compile:
//!
//! ```compile_fail
//! struct Unregistered;
//!
//! let mut buf = bytepack::ByteBuffer::new();
//! bytepack::serialize(&Unregistered, &mut buf);
//! ```
//!
//! and neither does a type claimed by two codecs:
//!
//! ```compile_fail
//! use bytepack::{ByteBuffer, ToBytes};
//!
//! struct Twice(u32);
//!
//! impl ToBytes for Twice {
//!     fn to_bytes(&self, buf: &mut ByteBuffer) {
//!         self.0.to_bytes(buf);
//!     }
//! }
//!
//! impl ToBytes for Twice {
//!     const CATEGORY: bytepack::Category = bytepack::Category::FixedLayout;
//!
//!     fn to_bytes(&self, buf: &mut ByteBuffer) {
//!         self.0.to_bytes(buf);
//!     }
//! }
//! ```

use alloc::vec::Vec;

use snafu::ensure;

use crate::error::TrailingBytesSnafu;
use crate::{ByteBuffer, FromBytes, Result, ToBytes, ToBytesExt};

/// Append the encoding of `value` to `buf`.
///
/// Values written back to back are read back with one [`deserialize`] call
/// each, in the same order and with the same types.
///
/// ```
/// use bytepack::{ByteBuffer, deserialize, serialize};
///
/// let mut buf = ByteBuffer::new();
/// serialize(&7i32, &mut buf);
/// serialize("seven", &mut buf);
///
/// assert_eq!(deserialize::<i32>(&mut buf).unwrap(), 7);
/// assert_eq!(deserialize::<String>(&mut buf).unwrap(), "seven");
/// assert!(buf.is_empty());
/// ```
#[inline]
pub fn serialize<T: ToBytes + ?Sized>(value: &T, buf: &mut ByteBuffer) {
    value.to_bytes(buf);
}

/// Consume one `T` from the front of `buf`.
#[inline]
pub fn deserialize<T: FromBytes>(buf: &mut ByteBuffer) -> Result<T> {
    T::from_bytes(buf)
}

/// Encode `value` into a fresh `Vec<u8>`.
pub fn to_vec<T: ToBytes + ?Sized>(value: &T) -> Vec<u8> {
    ToBytesExt::to_vec(value)
}

/// Decode exactly one `T` from `bytes`.
///
/// Unlike [`deserialize`], leftover input is an error.
pub fn from_slice<T: FromBytes>(bytes: &[u8]) -> Result<T> {
    let mut buf = ByteBuffer::from(bytes);
    let value = T::from_bytes(&mut buf)?;
    ensure!(
        buf.is_empty(),
        TrailingBytesSnafu {
            remaining: buf.remaining_len(),
        }
    );
    Ok(value)
}
