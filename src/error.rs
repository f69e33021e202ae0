//! Client error type shared by configuration and HTTP calls.
//!
//! ERROR HANDLING
//! ==============
//! Failures are wrapped, not normalized: a non-2xx response keeps its status
//! and raw body so each view decides what to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

use serde::Deserialize;

/// Errors produced by client configuration and API requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A build-time configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The request could not be built or the fetch itself failed.
    #[error("network request failed: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The backend answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP transport is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ClientError {
    /// Backend-supplied `detail` message from a `{"detail": ...}` error body.
    ///
    /// String details are returned as-is; structured details (validation
    /// error lists) are returned as compact JSON.
    pub fn detail(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail {
            serde_json::Value::String(text) => Some(text),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Text suitable for showing to the user: `detail` when present,
    /// otherwise the error's display form.
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or_else(|| self.to_string())
    }
}
