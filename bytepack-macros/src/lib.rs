//! Derive macros for bytepack.
//!
//! The generated codecs belong to the `Custom` category: fields are written
//! in declaration order with no framing, and enums are prefixed with a `u8`
//! variant index.

use proc_macro::TokenStream;
mod bytes;

/// Derive `ToBytes`.
#[proc_macro_derive(ToBytes, attributes(bytepack))]
pub fn derive_to_bytes(input: TokenStream) -> TokenStream {
    bytes::derive_to_bytes(input)
}

/// Derive `FromBytes`.
#[proc_macro_derive(FromBytes, attributes(bytepack))]
pub fn derive_from_bytes(input: TokenStream) -> TokenStream {
    bytes::derive_from_bytes(input)
}
