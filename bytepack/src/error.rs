//! Error types for packing and unpacking.

use snafu::Snafu;

/// Error during deserialization.
///
/// Serialization is infallible: appending to a [`ByteBuffer`](crate::ByteBuffer)
/// cannot fail. A type with no codec, or with two, is rejected by the compiler
/// instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum CodecError {
    /// Fewer bytes remain than a decode step requires.
    #[snafu(display("truncated input: needed {needed} bytes, only {available} available"))]
    TruncatedInput {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// A length prefix does not fit in memory on this platform.
    #[snafu(display("length {length} exceeds the addressable size on this platform"))]
    LengthOverflow {
        /// Decoded length, in elements or bytes.
        length: u64,
    },

    /// Text payload is not valid UTF-8.
    #[snafu(display("text is not valid UTF-8 past byte {valid_up_to}"))]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },

    /// Decoded bytes do not form a value of the target type.
    #[snafu(display("invalid data: {message}"))]
    InvalidData {
        /// Error description.
        message: &'static str,
    },

    /// Input left over after decoding a complete value.
    #[snafu(display("{remaining} trailing bytes after decoded value"))]
    TrailingBytes {
        /// Unread bytes.
        remaining: usize,
    },

    /// Custom error for user implementations.
    #[snafu(display("{message}"))]
    Custom {
        /// Error description.
        message: &'static str,
    },
}

/// Result type for codec operations.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
