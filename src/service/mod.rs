//! Thin per-entity adapters between the stores and the remote API.

pub mod resource_service;

pub use resource_service::ResourceService;
