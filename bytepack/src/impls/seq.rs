//! Sequence codec: 8-byte element count, then the elements.
//!
//! The element type picks the body layout through
//! [`ToBytes::slice_to_bytes`] and [`FromBytes::vec_from_bytes`]:
//! fixed-layout elements go out as one raw block, everything else (including
//! `bool`) goes element by element.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::{LEN_PREFIX, read_len, write_len};
use crate::{ByteBuffer, Category, FromBytes, Result, ToBytes};

impl<T: ToBytes> ToBytes for [T] {
    const CATEGORY: Category = Category::Sequence;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_len(self.len(), buf);
        T::slice_to_bytes(self, buf);
    }

    fn byte_len(&self) -> Option<usize> {
        LEN_PREFIX.checked_add(T::slice_byte_len(self)?)
    }
}

impl<T: ToBytes> ToBytes for Vec<T> {
    const CATEGORY: Category = Category::Sequence;

    #[inline]
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        self.as_slice().to_bytes(buf);
    }

    fn byte_len(&self) -> Option<usize> {
        self.as_slice().byte_len()
    }
}

impl<T: FromBytes> FromBytes for Vec<T> {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let count = read_len(buf)?;
        T::vec_from_bytes(count, buf)
    }
}

impl<T: FromBytes> FromBytes for Box<[T]> {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        Vec::from_bytes(buf).map(Vec::into_boxed_slice)
    }
}

// VecDeque<T> - same wire format as Vec<T>; the ring may wrap, so write both halves.
impl<T: ToBytes> ToBytes for VecDeque<T> {
    const CATEGORY: Category = Category::Sequence;

    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_len(self.len(), buf);
        let (front, back) = self.as_slices();
        T::slice_to_bytes(front, buf);
        T::slice_to_bytes(back, buf);
    }

    fn byte_len(&self) -> Option<usize> {
        let (front, back) = self.as_slices();
        LEN_PREFIX
            .checked_add(T::slice_byte_len(front)?)?
            .checked_add(T::slice_byte_len(back)?)
    }
}

impl<T: FromBytes> FromBytes for VecDeque<T> {
    #[inline]
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        Vec::from_bytes(buf).map(VecDeque::from)
    }
}
