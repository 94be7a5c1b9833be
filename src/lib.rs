#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Campus Store
//!
//! > **Resource stores for the campus admin console.**
//!
//! This crate is the client-side core of an administrative front end over a
//! remote REST API managing four collections: domains, students, teams and
//! trials. Each collection is exposed through a per-entity **resource
//! store**: a cache that lists, creates, updates and deletes entries while
//! tracking the `{loading, error, success}` lifecycle of in-flight requests,
//! so every screen renders its state without re-implementing that
//! bookkeeping.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One engine, four table rows
//! The store and service layers are written once against the
//! [`Resource`](resource::Resource) trait and reused for every entity. The
//! per-entity code is reduced to a table row: a route segment, a
//! list-response shape, and the payload types. Adding a collection to the
//! console is adding one small file, not new branching logic.
//!
//! ### Explicit ownership over singletons
//! Stores are constructed with an injected transport
//! ([`AdminSystem::new`](lifecycle::AdminSystem::new)) rather than living as
//! module-level globals, so tests spin up isolated systems over a scripted
//! transport with no shared state between them.
//!
//! ### One error kind
//! Every failure a view can see is
//! [`OperationFailed`](api::OperationFailed): the server's own message when
//! it sent one, a fixed per-operation fallback when it didn't, with the
//! transport cause kept in the error chain. Stores record the message into
//! their `error` flag *and* re-raise, so callers can notify without
//! re-deriving it.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Concurrency
//! Stores are `&self` async behind an `RwLock` that is never held across an
//! await. Overlapping calls to one store are neither rejected nor queued:
//! they race, and the last settlement determines the final flags and cache.
//! Acceptable for a single-user admin console; see [`store::core`] for the
//! full contract.
//!
//! ### Session expiry
//! The transport owns the bearer token. A 401 response evicts the shared
//! [`Session`](api::Session) (firing the application's navigation hook) and
//! still rejects, so in-flight operations settle into their failed state.
//!
//! ## 🗺️ Module Tour
//!
//! - [`store`] - The generic engine: cache, lifecycle, selection,
//!   statistics, and the mock transport for tests.
//! - [`resource`] - The [`Resource`](resource::Resource) trait and the four
//!   per-entity bindings.
//! - [`model`] - Entity records and payload DTOs.
//! - [`service`] - [`ResourceService`](service::ResourceService): route
//!   mapping and error normalization.
//! - [`api`] - The [`Transport`](api::Transport) seam, the reqwest
//!   implementation, and the session.
//! - [`lifecycle`] - [`AdminSystem`](lifecycle::AdminSystem), the wired set
//!   of stores.
//! - [`runtime`] - Tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use campus_store::api::{HttpTransport, Session};
//! use campus_store::lifecycle::AdminSystem;
//!
//! campus_store::runtime::setup_tracing();
//!
//! let session = Arc::new(Session::new());
//! session.set_token(saved_jwt);
//! let transport = Arc::new(HttpTransport::new("http://localhost:8000", session)?);
//!
//! let system = AdminSystem::new(transport);
//! let domaines = system.domaines.list().await?;
//! ```

pub mod api;
pub mod lifecycle;
pub mod model;
pub mod resource;
pub mod runtime;
pub mod service;
pub mod store;
