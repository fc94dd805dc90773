use alloc::string::String;
use alloc::vec::Vec;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::{FromBytes, ToBytes, ToBytesExt, from_slice};

/// Wrapper providing serde support for any `ToBytes + FromBytes` type.
///
/// The value is packed with this crate's codec first. Human-readable formats
/// (JSON, TOML) then receive the packed bytes as a base64 string; binary
/// formats receive them as a byte slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedSerde<T>(pub T);

impl<T> From<T> for PackedSerde<T> {
    fn from(value: T) -> Self {
        PackedSerde(value)
    }
}

impl<T> PackedSerde<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: ToBytes> Serialize for PackedSerde<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bytes = ToBytesExt::to_vec(&self.0);
        if serializer.is_human_readable() {
            serializer.serialize_str(&STANDARD.encode(&bytes))
        } else {
            serializer.serialize_bytes(&bytes)
        }
    }
}

impl<'de, T: FromBytes> Deserialize<'de> for PackedSerde<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = if deserializer.is_human_readable() {
            let encoded = String::deserialize(deserializer)?;
            STANDARD.decode(&encoded).map_err(serde::de::Error::custom)?
        } else {
            Vec::<u8>::deserialize(deserializer)?
        };
        from_slice(&bytes).map(PackedSerde).map_err(serde::de::Error::custom)
    }
}
