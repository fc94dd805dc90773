//! Adapters that carry packed values inside other serialization frameworks.

mod serde;

pub use self::serde::PackedSerde;
