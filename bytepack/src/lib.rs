//! Type-directed binary packing.
//!
//! This crate provides `ToBytes` and `FromBytes` traits for packing Rust
//! values into a [`ByteBuffer`] and unpacking them again. Every type belongs
//! to exactly one wire [`Category`]:
//!
//! - fixed-layout values (integers, floats, `bool`, `char`, plain `#[repr(C)]`
//!   structs) are written as their raw host-native bytes;
//! - text is an 8-byte length followed by the bytes;
//! - sequences are an 8-byte count followed by the elements, as one raw block
//!   when the element type is fixed-layout;
//! - maps are an 8-byte count followed by key/value pairs;
//! - anything else brings its own codec by implementing the traits, by hand
//!   or with the derive macros.
//!
//! The format carries no type tags or versions: the reader must ask for the
//! same types, in the same order, that the writer wrote.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use bytepack::{ByteBuffer, deserialize, serialize};
//!
//! let scores: HashMap<String, Vec<u32>> =
//!     [("ada".to_string(), vec![3, 1, 4])].into_iter().collect();
//!
//! let mut buf = ByteBuffer::new();
//! serialize(&scores, &mut buf);
//! serialize(&true, &mut buf);
//!
//! let decoded: HashMap<String, Vec<u32>> = deserialize(&mut buf).unwrap();
//! assert_eq!(decoded, scores);
//! assert!(deserialize::<bool>(&mut buf).unwrap());
//! ```
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod buffer;
mod dispatch;
mod error;
mod impls;
mod log;
mod traits;

pub use buffer::ByteBuffer;
pub use dispatch::{deserialize, from_slice, serialize, to_vec};
pub use error::{CodecError, Result};
pub use impls::LEN_PREFIX;
pub use impls::fixed::FixedLayout;
pub use traits::{Category, FromBytes, ToBytes, ToBytesExt};

// Re-export zerocopy derives for custom #[repr(C)] fixed-layout structs
pub use zerocopy::{FromBytes as ZcFromBytes, Immutable, IntoBytes, KnownLayout};

// Re-export derive macros when derive feature is enabled
#[cfg(feature = "derive")]
pub use bytepack_macros::{FromBytes as DeriveFromBytes, ToBytes as DeriveToBytes};

/// Derive input the macros reject.
///
/// Fields of an enum variant cannot be skipped, since decoding has no way to
/// rebuild them:
///
/// ```compile_fail
/// #[derive(bytepack::DeriveToBytes, bytepack::DeriveFromBytes)]
/// enum Reading {
///     Sample(#[bytepack(skip)] u32, u8),
/// }
/// ```
///
/// and unknown keys are errors on variant fields just as on struct fields:
///
/// ```compile_fail
/// #[derive(bytepack::DeriveToBytes, bytepack::DeriveFromBytes)]
/// enum Reading {
///     Sample(#[bytepack(bogus)] u8),
/// }
/// ```
#[cfg(all(doctest, feature = "derive"))]
pub struct DeriveErrors;

#[cfg(feature = "serde")]
pub mod bridges;

#[cfg(feature = "serde")]
pub use bridges::PackedSerde;

#[doc(hidden)]
pub mod __private {
    pub use crate::impls::fixed::{read_fixed, read_fixed_vec, write_fixed, write_fixed_slice};
    pub use alloc::vec::Vec;
}

#[cfg(test)]
mod tests;
