//! reqwest-backed [`Transport`] with bearer-token injection.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use super::session::Session;
use super::transport::{Method, Transport};

/// HTTP transport over a shared [`Session`].
///
/// Built once at application startup and shared by every
/// [`ResourceService`](crate::service::ResourceService). Each request carries
/// `Authorization: Bearer <token>` when the session holds a token; a 401
/// response evicts the session before the rejection propagates.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl HttpTransport {
    /// Creates the transport for a server base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending request");

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        // Deletion responses have no body; anything unparseable is Null.
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);

        normalize_response(status, payload, &self.session)
    }
}

/// Maps a raw status/body pair onto the transport contract.
///
/// A 401 evicts the session first and still rejects, so in-flight store
/// operations settle into their failed state rather than hanging on a
/// session that no longer exists.
fn normalize_response(status: u16, body: Value, session: &Session) -> Result<Value, ApiError> {
    if status == 401 {
        session.evict();
        return Err(ApiError::Unauthorized);
    }
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    Err(ApiError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn success_passes_body_through() {
        let session = Session::new();
        let body = json!([{"id": 1, "titre": "IA"}]);
        let out = normalize_response(200, body.clone(), &session).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn failure_extracts_server_message() {
        let session = Session::new();
        let err = normalize_response(422, json!({"message": "titre requis"}), &session).unwrap_err();
        assert_eq!(err.server_message(), Some("titre requis"));

        let err = normalize_response(500, Value::Null, &session).unwrap_err();
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn unauthorized_evicts_session_then_rejects() {
        let session = Session::new();
        session.set_token("stale-jwt");
        let redirected = Arc::new(AtomicBool::new(false));
        let flag = redirected.clone();
        session.on_evicted(move || flag.store(true, Ordering::SeqCst));

        let err = normalize_response(401, Value::Null, &session).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
        assert!(!session.is_authenticated());
        assert!(redirected.load(Ordering::SeqCst));
    }
}
