//! The uniform error shape every failed request resolves to.
//!
//! Callers never see a raw transport error: server rejections carry the
//! server's message and field errors, and the two no-response cases (timeout,
//! network) map to status 0 with fixed messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde_json::Value;

/// Message for a request that timed out client-side.
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please check your connection.";
/// Message for any other transport failure.
pub const NETWORK_MESSAGE: &str = "Unable to connect to server. Please try again.";
/// Fallback when a server rejection carries no message of its own.
pub const GENERIC_MESSAGE: &str = "An error occurred";

const TIMEOUT_DETAIL: &str = "Connection timeout";
const NETWORK_DETAIL: &str = "Network error";

/// Normalized request failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// HTTP status, or 0 when no response was received.
    pub status: u16,
    pub message: String,
    /// Per-field validation messages, when the server supplied them.
    pub errors: BTreeMap<String, String>,
}

/// Failure taxonomy, derived from the normalized shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401; the session was reset and the caller should expect a redirect.
    AuthenticationExpired,
    /// Any other HTTP rejection.
    ServerRejected,
    /// No response within the fixed request timeout.
    Timeout,
    /// No response for any other reason.
    NetworkUnavailable,
}

impl ApiError {
    /// Build from an HTTP rejection, preferring the server's own message and
    /// field errors.
    #[must_use]
    pub fn from_response(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_MESSAGE)
            .to_owned();
        let errors = body
            .get("errors")
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(field, value)| {
                        value
                            .as_str()
                            .map(|text| (field.clone(), text.to_owned()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            status,
            message,
            errors,
        }
    }

    /// The client-side timeout case.
    #[must_use]
    pub fn timeout() -> Self {
        Self {
            status: 0,
            message: TIMEOUT_MESSAGE.to_owned(),
            errors: BTreeMap::from([("general".to_owned(), TIMEOUT_DETAIL.to_owned())]),
        }
    }

    /// The no-response network case.
    #[must_use]
    pub fn network() -> Self {
        Self {
            status: 0,
            message: NETWORK_MESSAGE.to_owned(),
            errors: BTreeMap::from([("general".to_owned(), NETWORK_DETAIL.to_owned())]),
        }
    }

    /// A response arrived but its body could not be decoded.
    #[must_use]
    pub fn decode(status: u16) -> Self {
        Self {
            status,
            message: "Invalid response from server".to_owned(),
            errors: BTreeMap::new(),
        }
    }

    /// Classify this failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.status {
            401 => ErrorKind::AuthenticationExpired,
            0 => {
                if self.errors.get("general").map(String::as_str) == Some(TIMEOUT_DETAIL) {
                    ErrorKind::Timeout
                } else {
                    ErrorKind::NetworkUnavailable
                }
            }
            _ => ErrorKind::ServerRejected,
        }
    }
}
