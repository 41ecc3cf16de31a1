//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, server rejections, and schema mismatches are distinct
//! kinds so callers and the toast layer can surface each appropriately.
//! Malformed durable session state is *not* an error: the session store
//! treats it as an absent session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a backend call, as seen by pages and credential operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure with no HTTP response.
    #[error("network request failed: {0}")]
    Network(String),
    /// Non-2xx response. `message` is already user-presentable: the
    /// server-supplied message when one was present, a generic fallback
    /// otherwise.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("malformed server response")]
    Malformed,
}

/// Error body shape shared by all backend rejection responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// User-presentable message for a rejected request.
pub fn rejection_message(status: u16, body_message: Option<String>) -> String {
    match body_message {
        Some(message) if !message.trim().is_empty() => message,
        _ => format!("Request failed with status {status}"),
    }
}
