//! Uniform response envelope.
//!
//! Every JSON response, successful or not, has the same top-level shape:
//! `{"success", "message", "data", "timestamp", "endpoint"}`.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Response envelope. `data` is serialized as `null` when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope<T = Value> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    /// ISO-8601 instant captured when the envelope was built.
    pub timestamp: String,
    /// Request path the envelope answers.
    pub endpoint: String,
}

impl<T: Serialize> ResponseEnvelope<T> {
    pub fn build(
        success: bool,
        message: impl Into<String>,
        data: Option<T>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            success,
            message: message.into(),
            data,
            timestamp: now_iso8601(),
            endpoint: endpoint.into(),
        }
    }

    /// Successful envelope carrying `data`.
    pub fn ok(message: impl Into<String>, data: T, endpoint: impl Into<String>) -> Self {
        Self::build(true, message, Some(data), endpoint)
    }
}

/// Current instant as ISO-8601 (UTC, microseconds).
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
