//! Built-in codecs, one module per category.
//!
//! `bool` and `char` live here: both are fixed-size, but not every byte
//! pattern is a valid value, so neither can take the bulk sequence path.

pub mod fixed;
pub mod map;
pub mod seq;
pub mod text;
pub mod tuple;

use alloc::boxed::Box;

use crate::error::{InvalidDataSnafu, LengthOverflowSnafu};
use crate::{ByteBuffer, Category, FromBytes, Result, ToBytes};

/// Width of every count and length prefix.
pub const LEN_PREFIX: usize = 8;

/// Write a count or byte-length prefix as a host-native `u64`.
#[inline]
pub(crate) fn write_len(len: usize, buf: &mut ByteBuffer) {
    buf.append(&(len as u64).to_ne_bytes());
}

/// Read a count or byte-length prefix.
#[inline]
pub(crate) fn read_len(buf: &mut ByteBuffer) -> Result<usize> {
    let len = u64::from_ne_bytes(buf.consume_array()?);
    usize::try_from(len).map_err(|_| LengthOverflowSnafu { length: len }.build())
}

// bool - one byte, 0 or 1 on the wire. Decoding treats any non-zero byte as true.
impl ToBytes for bool {
    const CATEGORY: Category = Category::FixedLayout;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        buf.append(&[*self as u8]);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(1)
    }
}

impl FromBytes for bool {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let [byte] = buf.consume_array()?;
        Ok(byte != 0)
    }
}

// char - the scalar value as a host-native u32.
impl ToBytes for char {
    const CATEGORY: Category = Category::FixedLayout;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        (*self as u32).to_bytes(buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(4)
    }
}

impl FromBytes for char {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let code = u32::from_bytes(buf)?;
        char::from_u32(code).ok_or_else(|| {
            InvalidDataSnafu {
                message: "invalid char codepoint",
            }
            .build()
        })
    }
}

// Option<T> - tag byte, then the payload when present.
impl<T: ToBytes> ToBytes for Option<T> {
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        match self {
            None => buf.append(&[0]),
            Some(v) => {
                buf.append(&[1]);
                v.to_bytes(buf);
            }
        }
    }

    fn byte_len(&self) -> Option<usize> {
        match self {
            None => Some(1),
            Some(v) => Some(1 + v.byte_len()?),
        }
    }
}

impl<T: FromBytes> FromBytes for Option<T> {
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        match buf.consume_array::<1>()? {
            [0] => Ok(None),
            [1] => Ok(Some(T::from_bytes(buf)?)),
            _ => InvalidDataSnafu {
                message: "Option tag must be 0 or 1",
            }
            .fail(),
        }
    }
}

// References and boxes are transparent: same category, same bytes.
impl<T: ToBytes + ?Sized> ToBytes for &T {
    const CATEGORY: Category = T::CATEGORY;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        (**self).to_bytes(buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        (**self).byte_len()
    }
}

impl<T: ToBytes + ?Sized> ToBytes for &mut T {
    const CATEGORY: Category = T::CATEGORY;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        (**self).to_bytes(buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        (**self).byte_len()
    }
}

impl<T: ToBytes + ?Sized> ToBytes for Box<T> {
    const CATEGORY: Category = T::CATEGORY;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        (**self).to_bytes(buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        (**self).byte_len()
    }
}

impl<T: FromBytes> FromBytes for Box<T> {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        T::from_bytes(buf).map(Box::new)
    }
}
