//! Error types for the transport and service boundaries.

use thiserror::Error;

/// Errors raised by the transport collaborator.
///
/// Stores and views never match on these directly; the service layer
/// collapses every variant into [`OperationFailed`]. The variants exist so
/// the cause survives in the error chain and so the transport can signal
/// session expiry distinctly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server or the connection dropped.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status, possibly carrying a
    /// human-readable `message` field in the body.
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },

    /// The server rejected the bearer token. By the time this is returned
    /// the session has already been evicted.
    #[error("unauthorized")]
    Unauthorized,

    /// The response body was not the JSON shape we expected.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// The single error kind surfaced by services and stores.
///
/// No distinction is made between network failures, validation failures and
/// server-side business errors: all collapse into one message, chosen from
/// the server's own `message` field when present, else a fixed per-operation
/// fallback. The triggering [`ApiError`] is kept as the source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct OperationFailed {
    pub message: String,
    #[source]
    pub source: ApiError,
}

impl OperationFailed {
    /// Wraps a transport error, preferring the server-provided message over
    /// the fallback text.
    pub fn normalize(source: ApiError, fallback: &str) -> Self {
        let message = source.server_message().unwrap_or(fallback).to_string();
        Self { message, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = OperationFailed::normalize(
            ApiError::Status {
                status: 422,
                message: Some("titre deja utilise".into()),
            },
            "failed to create domaine",
        );
        assert_eq!(err.message, "titre deja utilise");
    }

    #[test]
    fn fallback_used_when_server_is_silent() {
        let err = OperationFailed::normalize(
            ApiError::Status {
                status: 500,
                message: None,
            },
            "failed to load domaines",
        );
        assert_eq!(err.message, "failed to load domaines");

        let err = OperationFailed::normalize(
            ApiError::Network("connection refused".into()),
            "failed to load domaines",
        );
        assert_eq!(err.message, "failed to load domaines");
    }
}
