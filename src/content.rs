//! Leaf Content Codec
//!
//! Checklist and kanban leaves store their records as a JSON array in the
//! node's content string. Decoding failures never reach the user: the
//! editors fall back to an empty list.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Content codec errors
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    Malformed(String),
    Encode(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Malformed(msg) => write!(f, "Malformed content: {}", msg),
            ContentError::Encode(msg) => write!(f, "Encode failed: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

/// Decode a record list. Empty content is an empty list.
pub fn decode_items<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, ContentError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content).map_err(|e| ContentError::Malformed(e.to_string()))
}

/// Decode for an editor: malformed content yields an empty list
pub fn load_items<T: DeserializeOwned>(name: &str, content: &str) -> Vec<T> {
    decode_items(content).unwrap_or_else(|e| {
        log::warn!("[CONTENT] {}: {}, starting empty", name, e);
        Vec::new()
    })
}

pub fn encode_items<T: Serialize>(items: &[T]) -> Result<String, ContentError> {
    serde_json::to_string(items).map_err(|e| ContentError::Encode(e.to_string()))
}

/// Time-derived record id (ISO-8601, millisecond precision).
/// A numeric suffix is added when the timestamp is already taken.
pub fn generate_id<'a>(taken: impl IntoIterator<Item = &'a str>) -> String {
    id_at(Utc::now(), taken)
}

fn id_at<'a>(now: DateTime<Utc>, taken: impl IntoIterator<Item = &'a str>) -> String {
    let base = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let taken: Vec<&str> = taken.into_iter().collect();
    if !taken.contains(&base.as_str()) {
        return base;
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains(&candidate.as_str()))
        .unwrap_or(base)
}
