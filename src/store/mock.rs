//! # Mock Transport
//!
//! A scripted [`Transport`] for driving stores in tests without a server.
//!
//! Queue expectations in the order requests will be issued, run the store
//! operations, then call [`MockTransport::verify`]:
//!
//! ```ignore
//! let mock = MockTransport::new();
//! mock.expect(Method::Get, "/api/ListDomaine")
//!     .return_ok(json!([{"id": 1, "titre": "IA"}]));
//!
//! let store: ResourceStore<Domaine> = ResourceStore::new(Arc::new(mock.clone()));
//! store.list().await?;
//! mock.verify();
//! ```
//!
//! A **gated** expectation holds its response until the test releases it,
//! which makes out-of-order settlement of overlapping operations
//! deterministic instead of a race.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::api::{ApiError, Method, Transport};

struct Expectation {
    method: Method,
    path: String,
    response: Result<Value, ApiError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Expectation-queue transport. Cloning shares the queue, so the same mock
/// can back several stores in one test.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockTransport {
    /// Creates a mock with no expectations. Any request panics until one is
    /// queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an expectation for the next request.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            mock: self,
            method,
            path: path.into(),
        }
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("{} expectation(s) never consumed", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        _body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let expectation = self
            .expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {method} {path}"));

        assert_eq!(
            (expectation.method, expectation.path.as_str()),
            (method, path),
            "request does not match the next queued expectation",
        );

        if let Some(gate) = expectation.gate {
            gate.await.expect("gate dropped before release");
        }
        expectation.response
    }
}

/// Builder returned by [`MockTransport::expect`].
pub struct ExpectationBuilder<'a> {
    mock: &'a MockTransport,
    method: Method,
    path: String,
}

impl ExpectationBuilder<'_> {
    /// The request resolves with this body.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body), None);
    }

    /// The request rejects with this error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error), None);
    }

    /// As [`return_ok`](Self::return_ok), but the response is held until the
    /// returned [`Gate`] is released.
    #[must_use]
    pub fn return_ok_gated(self, body: Value) -> Gate {
        let (release, held) = oneshot::channel();
        self.push(Ok(body), Some(held));
        Gate(release)
    }

    fn push(self, response: Result<Value, ApiError>, gate: Option<oneshot::Receiver<()>>) {
        self.mock.expectations.lock().unwrap().push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
            gate,
        });
    }
}

/// Release handle for a gated expectation.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    /// Lets the held response settle.
    pub fn release(self) {
        let _ = self.0.send(());
    }
}
