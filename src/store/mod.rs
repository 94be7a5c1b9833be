//! Generic resource store engine.
//!
//! This is the core of the crate: one [`ResourceStore`] per entity type owns
//! that collection's client-side cache, its request-lifecycle flags and the
//! current selection, and applies the cache-patch rules after each mutation.
//!
//! # Main Components
//!
//! - [`ResourceStore`] - The generic engine, written once, reused per entity
//! - [`RequestLifecycle`] - The `{loading, error, success}` tri-flag record
//! - [`Statistiques`] - Derived role breakdown of the student store
//!
//! # Testing
//!
//! See [`mock`] for a scripted transport that drives stores without a server.

pub mod core;
pub mod lifecycle;
pub mod mock;
pub mod stats;

pub use self::core::ResourceStore;
pub use self::lifecycle::RequestLifecycle;
pub use self::mock::MockTransport;
pub use self::stats::Statistiques;
