//! The remote API boundary.
//!
//! Everything above this module talks to the server through the [`Transport`]
//! trait: one capability, `request(method, path, body?) -> Result<Value, ApiError>`.
//! The real implementation is [`HttpTransport`] (reqwest, bearer token,
//! 401-driven session eviction); tests substitute
//! [`MockTransport`](crate::store::mock::MockTransport).
//!
//! # Main Components
//!
//! - [`Transport`] - The capability consumed by services and stores
//! - [`HttpTransport`] - reqwest-backed implementation with token injection
//! - [`Session`] - Shared bearer-token state plus the eviction hook
//! - [`ApiError`] / [`OperationFailed`] - The two error layers

pub mod error;
pub mod http;
pub mod session;
pub mod transport;

pub use error::{ApiError, OperationFailed};
pub use http::HttpTransport;
pub use session::Session;
pub use transport::{Method, Transport};
