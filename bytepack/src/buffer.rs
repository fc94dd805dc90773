//! Append-at-end, consume-from-front byte buffer.

use alloc::vec::Vec;

use crate::error::{Result, TruncatedInputSnafu};
use crate::log::{debug, trace};

/// Growable byte buffer with a read cursor.
///
/// Writes append to the end. Reads consume from the front by advancing the
/// cursor, so a read never shifts the remaining bytes. Consumed bytes stay
/// allocated until [`compact`](Self::compact) or [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    pos: usize,
}

impl ByteBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            pos: 0,
        }
    }

    /// Create an empty buffer that can hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Append bytes at the write end.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Remove and return the first `n` unread bytes.
    #[inline]
    pub fn consume(&mut self, n: usize) -> Result<&[u8]> {
        let available = self.remaining_len();
        if n > available {
            trace!(needed = n, available, "truncated input");
            return TruncatedInputSnafu {
                needed: n,
                available,
            }
            .fail();
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.bytes[start..self.pos])
    }

    /// Remove and return the first `N` unread bytes as an array.
    #[inline]
    pub fn consume_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.consume(N)?);
        Ok(out)
    }

    /// Unread bytes, front first.
    #[inline]
    pub fn remaining(&self) -> &[u8] {
        &self.bytes[self.pos..]
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining_len(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// True when every written byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Bytes consumed since creation or the last compaction.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Every retained byte, including the consumed prefix.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.bytes
    }

    /// Drop the consumed prefix and move the cursor back to the start.
    pub fn compact(&mut self) {
        if self.pos == 0 {
            return;
        }
        debug!(consumed = self.pos, retained = self.remaining_len(), "compacting buffer");
        self.bytes.drain(..self.pos);
        self.pos = 0;
    }

    /// Discard all bytes, read or not.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.pos = 0;
    }

    /// Take the unread bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.compact();
        self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.remaining()
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.bytes.extend(iter);
    }
}
