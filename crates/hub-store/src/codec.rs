//! Value encoding shared by the store implementations.
//!
//! Values are stored as text. JSON is written compactly; reads fall back to a
//! JSON string when the stored text is not JSON (raw markdown, base64 images).

use hub_core::StoreError;
use serde_json::Value;

pub(crate) fn encode(value: &Value) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))
}

pub(crate) fn decode(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}
