//! Associative codec: 8-byte pair count, then key/value pairs back to back.
//!
//! Pairs are written in the map's iteration order, which is not part of the
//! wire contract. Decoding inserts into a fresh map, so a repeated key keeps
//! the last value read.

use alloc::collections::BTreeMap;
#[cfg(any(feature = "std", feature = "hashbrown"))]
use core::hash::{BuildHasher, Hash};

use super::{LEN_PREFIX, read_len, write_len};
use crate::{ByteBuffer, Category, FromBytes, Result, ToBytes};

fn write_pairs<'a, K, V>(
    len: usize,
    pairs: impl IntoIterator<Item = (&'a K, &'a V)>,
    buf: &mut ByteBuffer,
) where
    K: ToBytes + 'a,
    V: ToBytes + 'a,
{
    write_len(len, buf);
    for (key, value) in pairs {
        key.to_bytes(buf);
        value.to_bytes(buf);
    }
}

fn pairs_len<'a, K, V>(pairs: impl IntoIterator<Item = (&'a K, &'a V)>) -> Option<usize>
where
    K: ToBytes + 'a,
    V: ToBytes + 'a,
{
    let mut total = LEN_PREFIX;
    for (key, value) in pairs {
        total += key.byte_len()? + value.byte_len()?;
    }
    Some(total)
}

fn read_pairs<K, V>(count: usize, buf: &mut ByteBuffer, mut insert: impl FnMut(K, V)) -> Result<()>
where
    K: FromBytes,
    V: FromBytes,
{
    for _ in 0..count {
        let key = K::from_bytes(buf)?;
        let value = V::from_bytes(buf)?;
        insert(key, value);
    }
    Ok(())
}

/// Pairs worth reserving for: bounded by the unread input, so a corrupt
/// count cannot force a huge allocation.
#[cfg(any(feature = "std", feature = "hashbrown"))]
fn reserve_hint(count_hint: usize, buf: &ByteBuffer) -> usize {
    count_hint.min(buf.remaining_len())
}

impl<K: ToBytes, V: ToBytes> ToBytes for BTreeMap<K, V> {
    const CATEGORY: Category = Category::Associative;

    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_pairs(self.len(), self, buf);
    }

    fn byte_len(&self) -> Option<usize> {
        pairs_len(self)
    }
}

impl<K: FromBytes + Ord, V: FromBytes> FromBytes for BTreeMap<K, V> {
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let count = read_len(buf)?;
        let mut map = BTreeMap::new();
        read_pairs(count, buf, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}

// std HashMap<K, V, S> - any hasher; decode needs a default-constructible one.
#[cfg(feature = "std")]
impl<K: ToBytes, V: ToBytes, S> ToBytes for std::collections::HashMap<K, V, S> {
    const CATEGORY: Category = Category::Associative;

    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_pairs(self.len(), self, buf);
    }

    fn byte_len(&self) -> Option<usize> {
        pairs_len(self)
    }
}

#[cfg(feature = "std")]
impl<K, V, S> FromBytes for std::collections::HashMap<K, V, S>
where
    K: FromBytes + Eq + Hash,
    V: FromBytes,
    S: BuildHasher + Default,
{
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let count = read_len(buf)?;
        let mut map = Self::with_capacity_and_hasher(reserve_hint(count, buf), S::default());
        read_pairs(count, buf, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}

// hashbrown HashMap<K, V, S> - same wire format, usable without std.
#[cfg(feature = "hashbrown")]
impl<K: ToBytes, V: ToBytes, S> ToBytes for hashbrown::HashMap<K, V, S> {
    const CATEGORY: Category = Category::Associative;

    fn to_bytes(&self, buf: &mut ByteBuffer) {
        write_pairs(self.len(), self, buf);
    }

    fn byte_len(&self) -> Option<usize> {
        pairs_len(self)
    }
}

#[cfg(feature = "hashbrown")]
impl<K, V, S> FromBytes for hashbrown::HashMap<K, V, S>
where
    K: FromBytes + Eq + Hash,
    V: FromBytes,
    S: BuildHasher + Default,
{
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        let count = read_len(buf)?;
        let mut map = Self::with_capacity_and_hasher(reserve_hint(count, buf), S::default());
        read_pairs(count, buf, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}
