//! Fixed-layout codec: raw host-native bytes, no framing.
//!
//! A type joins this category deliberately through [`FixedLayout`], whose
//! zerocopy supertraits prove at compile time that every byte pattern of the
//! right size is a valid value and that the value has no padding or
//! indirection. Only then may a bulk byte copy stand in for a value copy.

use alloc::vec::Vec;
use core::mem::size_of;

use zerocopy::{FromBytes as ZcFromBytes, Immutable, IntoBytes};

use crate::error::LengthOverflowSnafu;
use crate::log::trace;
use crate::{ByteBuffer, Result};

/// Marker for types encoded as their raw in-memory bytes.
///
/// Implement it with [`fixed_layout!`](crate::fixed_layout), which also
/// provides the matching [`ToBytes`](crate::ToBytes) and
/// [`FromBytes`](crate::FromBytes) impls.
pub trait FixedLayout: ZcFromBytes + IntoBytes + Immutable + Copy {}

/// Append the raw bytes of one value.
#[doc(hidden)]
#[inline]
pub fn write_fixed<T: FixedLayout>(value: &T, buf: &mut ByteBuffer) {
    buf.append(value.as_bytes());
}

/// Append the raw bytes of a slice as one contiguous block.
#[doc(hidden)]
#[inline]
pub fn write_fixed_slice<T: FixedLayout>(items: &[T], buf: &mut ByteBuffer) {
    buf.append(items.as_bytes());
}

/// Consume `size_of::<T>()` bytes and reinterpret them as `T`.
#[doc(hidden)]
#[inline]
pub fn read_fixed<T: FixedLayout>(buf: &mut ByteBuffer) -> Result<T> {
    let bytes = buf.consume(size_of::<T>())?;
    let mut out = T::new_zeroed();
    out.as_mut_bytes().copy_from_slice(bytes);
    Ok(out)
}

/// Consume `count * size_of::<T>()` bytes as one block of `count` values.
#[doc(hidden)]
pub fn read_fixed_vec<T: FixedLayout>(count: usize, buf: &mut ByteBuffer) -> Result<Vec<T>> {
    let Some(total) = count.checked_mul(size_of::<T>()) else {
        trace!(count, elem_size = size_of::<T>(), "sequence byte length overflows usize");
        return LengthOverflowSnafu {
            length: count as u64,
        }
        .fail();
    };
    let bytes = buf.consume(total)?;
    // Zero-sized elements get their length without a per-element pass.
    let Ok(mut out) = T::new_vec_zeroed(count) else {
        return LengthOverflowSnafu {
            length: count as u64,
        }
        .fail();
    };
    out.as_mut_slice().as_mut_bytes().copy_from_slice(bytes);
    Ok(out)
}

/// Opt a type into the fixed-layout category.
///
/// The type must derive zerocopy's `FromBytes`, `IntoBytes` and `Immutable`
/// (plus `Clone` and `Copy`), which in turn requires a defined layout such as
/// `#[repr(C)]` with no padding.
///
/// ```
/// use bytepack::{ByteBuffer, Category, ToBytes, deserialize, serialize};
/// use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
///
/// #[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Clone, Copy, Debug, PartialEq)]
/// #[repr(C)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// bytepack::fixed_layout!(Point);
///
/// assert_eq!(Point::CATEGORY, Category::FixedLayout);
///
/// let mut buf = ByteBuffer::new();
/// serialize(&vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }], &mut buf);
/// assert_eq!(buf.remaining_len(), 8 + 2 * 8);
///
/// let points: Vec<Point> = deserialize(&mut buf).unwrap();
/// assert_eq!(points[1], Point { x: 3, y: 4 });
/// ```
#[macro_export]
macro_rules! fixed_layout {
    ($($ty:ty),+ $(,)?) => { $(
        impl $crate::FixedLayout for $ty {}

        impl $crate::ToBytes for $ty {
            const CATEGORY: $crate::Category = $crate::Category::FixedLayout;

            #[inline]
            fn to_bytes(&self, buf: &mut $crate::ByteBuffer) {
                $crate::__private::write_fixed(self, buf);
            }

            #[inline]
            fn byte_len(&self) -> ::core::option::Option<usize> {
                ::core::option::Option::Some(::core::mem::size_of::<$ty>())
            }

            #[inline]
            fn slice_byte_len(items: &[Self]) -> ::core::option::Option<usize> {
                items.len().checked_mul(::core::mem::size_of::<$ty>())
            }

            #[inline]
            fn slice_to_bytes(items: &[Self], buf: &mut $crate::ByteBuffer) {
                $crate::__private::write_fixed_slice(items, buf);
            }
        }

        impl $crate::FromBytes for $ty {
            #[inline]
            fn from_bytes(buf: &mut $crate::ByteBuffer) -> $crate::Result<Self> {
                $crate::__private::read_fixed(buf)
            }

            #[inline]
            fn vec_from_bytes(
                count: usize,
                buf: &mut $crate::ByteBuffer,
            ) -> $crate::Result<$crate::__private::Vec<Self>> {
                $crate::__private::read_fixed_vec(count, buf)
            }
        }
    )+ };
}

fixed_layout!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, ());

// Arrays of fixed-layout values are themselves fixed-layout.
impl<T: FixedLayout, const N: usize> FixedLayout for [T; N] {}

impl<T: FixedLayout, const N: usize> crate::ToBytes for [T; N] {
    const CATEGORY: crate::Category = crate::Category::FixedLayout;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_fixed(self, buf);
    }

    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Some(size_of::<Self>())
    }

    #[inline]
    fn slice_byte_len(items: &[Self]) -> Option<usize> {
        items.len().checked_mul(size_of::<Self>())
    }

    #[inline]
    fn slice_to_bytes(items: &[Self], buf: &mut ByteBuffer) {
        write_fixed_slice(items, buf);
    }
}

impl<T: FixedLayout, const N: usize> crate::FromBytes for [T; N] {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        read_fixed(buf)
    }

    #[inline]
    fn vec_from_bytes(count: usize, buf: &mut ByteBuffer) -> Result<Vec<Self>> {
        read_fixed_vec(count, buf)
    }
}
