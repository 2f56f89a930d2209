//! Response envelope handling.
//!
//! The backend wraps payloads as `{ "content": ..., "message": ... }`. Bare
//! payloads are accepted too. Error bodies carry a human readable `message`.

use crate::SyncResult;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

/// Decode a success body into `T`, unwrapping `content` when present
pub(crate) fn decode_content<T: DeserializeOwned>(bytes: &[u8]) -> SyncResult<T> {
    let mut value: Value = serde_json::from_slice(bytes)?;

    let payload = match value.get_mut("content").map(Value::take) {
        Some(content) => content,
        None => value,
    };

    Ok(serde_json::from_value(payload)?)
}

/// Best-effort extraction of the backend's error message
pub(crate) fn error_message(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
}
