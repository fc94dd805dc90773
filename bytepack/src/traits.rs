//! Codec traits and the category each implementation declares.

use alloc::vec::Vec;

use crate::{ByteBuffer, Result};

/// Wire category of an encodable type.
///
/// Every [`ToBytes`] impl declares exactly one category through
/// [`ToBytes::CATEGORY`]. Since a type can have only one impl, it can never
/// resolve to two categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Raw host-native bytes of a fixed size.
    FixedLayout,
    /// Length-prefixed byte run.
    Text,
    /// Count-prefixed ordered elements.
    Sequence,
    /// Count-prefixed key/value pairs.
    Associative,
    /// Bytes written by a hand-written or derived codec.
    Custom,
}

/// Serialize a value by appending to a buffer.
pub trait ToBytes {
    /// Wire category of this type.
    ///
    /// Descriptive only: the bytes written are whatever [`to_bytes`](Self::to_bytes)
    /// produces, and nothing checks that an impl's output matches the category
    /// it declares. Impls generated by [`fixed_layout!`](crate::fixed_layout)
    /// and the built-in text, sequence and map impls declare theirs accurately.
    const CATEGORY: Category = Category::Custom;

    /// Append the encoded value.
    fn to_bytes(&self, buf: &mut ByteBuffer);

    /// Encoded size, if cheap to compute. Used to pre-size output buffers.
    #[inline]
    fn byte_len(&self) -> Option<usize> {
        None
    }

    /// Summed encoded size of a slice's elements, without the count prefix.
    ///
    /// Fixed-layout types override this with a single multiplication.
    #[doc(hidden)]
    #[inline]
    fn slice_byte_len(items: &[Self]) -> Option<usize>
    where
        Self: Sized,
    {
        items
            .iter()
            .try_fold(0usize, |total, item| total.checked_add(item.byte_len()?))
    }

    /// Append every element of a slice, without a count prefix.
    ///
    /// Fixed-layout types override this with a single bulk copy.
    #[doc(hidden)]
    #[inline]
    fn slice_to_bytes(items: &[Self], buf: &mut ByteBuffer)
    where
        Self: Sized,
    {
        for item in items {
            item.to_bytes(buf);
        }
    }
}

/// Deserialize a value by consuming a prefix of a buffer.
pub trait FromBytes: Sized {
    /// Consume one encoded value from the front of the buffer.
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self>;

    /// Consume `count` elements written by [`ToBytes::slice_to_bytes`].
    ///
    /// Must mirror the encode-side choice: fixed-layout types read one bulk
    /// block, everything else reads element by element.
    #[doc(hidden)]
    fn vec_from_bytes(count: usize, buf: &mut ByteBuffer) -> Result<Vec<Self>> {
        // A malformed count must not drive a huge allocation.
        let mut out = Vec::with_capacity(count.min(buf.remaining_len()));
        for _ in 0..count {
            out.push(Self::from_bytes(buf)?);
        }
        Ok(out)
    }
}

/// Convenience methods for [`ToBytes`] types.
pub trait ToBytesExt: ToBytes {
    /// Serialize into a fresh `Vec<u8>`.
    fn to_vec(&self) -> Vec<u8> {
        self.to_buffer().into_vec()
    }

    /// Serialize into a fresh [`ByteBuffer`].
    fn to_buffer(&self) -> ByteBuffer {
        let mut buf = ByteBuffer::with_capacity(self.byte_len().unwrap_or(64));
        self.to_bytes(&mut buf);
        buf
    }
}

impl<T: ToBytes + ?Sized> ToBytesExt for T {}
