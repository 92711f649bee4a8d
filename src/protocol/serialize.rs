// Serialization layer - Convert wire messages to/from JSON text
//!
//! The transport carries one JSON object per message. These helpers wrap
//! `serde_json` so malformed input surfaces as a `SyncError::Protocol`
//! instead of a raw parser error.

use crate::error::{Result, SyncError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize any protocol message to a JSON string
pub fn encode_message<M: Serialize>(msg: &M) -> Result<String> {
    Ok(serde_json::to_string(msg)?)
}

/// Deserialize a protocol message from a JSON string
pub fn decode_message<M: DeserializeOwned>(text: &str) -> Result<M> {
    serde_json::from_str(text)
        .map_err(|e| SyncError::Protocol(format!("Failed to decode message: {}", e)))
}
