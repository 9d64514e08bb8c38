//! Payload Codec Module
//!
//! Encodes results into the store's string form and classifies what comes
//! back out of the store.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CacheError, Result};


/// Stored form of a tombstone
pub const TOMBSTONE: &str = " ";

// == Payload ==
/// What a present store entry holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// An encoded result
    Value(String),
    /// The key previously resolved to nothing
    Tombstone,
}

impl Payload {
    /// Classifies a raw stored string. Blank strings are tombstones.
    pub fn from_stored(raw: String) -> Self {
        if raw.trim().is_empty() {
            Payload::Tombstone
        } else {
            Payload::Value(raw)
        }
    }

    /// Returns the string to hand to the store.
    pub fn into_stored(self) -> String {
        match self {
            Payload::Value(raw) => raw,
            Payload::Tombstone => TOMBSTONE.to_string(),
        }
    }
}

// == Encode ==
/// Encodes a result as JSON.
///
/// # Errors
/// - `Serialization` if the value cannot be encoded, or encodes to a blank
///   string that would read back as a tombstone
pub fn encode<T: Serialize>(value: &T) -> Result<Payload> {
    let raw = serde_json::to_string(value)?;
    if raw.trim().is_empty() {
        return Err(CacheError::Serialization(serde::ser::Error::custom(
            "encoded payload is blank",
        )));
    }
    Ok(Payload::Value(raw))
}

// == Decode ==
/// Decodes a JSON payload into the declared result type.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}
