//! System wiring: constructing the per-entity stores over one transport.

pub mod admin_system;

pub use admin_system::AdminSystem;
