//! The capability the store layer consumes instead of a concrete HTTP client.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use super::error::ApiError;

/// The verbs the admin API actually uses. The API is POST-heavy: updates and
/// deletions go through POST routes, not PUT or DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A remote request function: resolves with a parsed JSON body or rejects
/// with an [`ApiError`].
///
/// # Architecture Note
/// Services depend on this trait, not on reqwest. That keeps the store layer
/// testable without a server (see [`MockTransport`](crate::store::mock::MockTransport))
/// and keeps the transport's cross-cutting concerns (bearer token, session
/// eviction) out of the store contract entirely.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one request. `body`, when present, is sent as JSON.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError>;
}
