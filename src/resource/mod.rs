//! Per-entity bindings onto the generic store engine.
//!
//! Each entity implements [`Resource`] in its own file: its route segment,
//! the shape its list endpoint wraps the collection in, and nothing else.
//! Adding an entity to the console means adding one small file here — one
//! table row, not new branching logic in the engine.
//!
//! # Main Components
//!
//! - [`Resource`] - Trait entity types implement to be managed by a store
//! - [`CollectionShape`] - The exhaustive list-response extraction table
//! - [`Countable`] - Marker for entities with a server-side count endpoint

mod domaine;
mod equipe;
mod essai;
mod etudiant;

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Contract an entity type satisfies to be managed by a
/// [`ResourceStore`](crate::store::ResourceStore).
///
/// # Architecture Note
/// The store engine and the service layer are written once against this
/// trait and reused for every collection the console manages. Associated
/// types keep the operations honest: a `Domaine` store only accepts a
/// [`DomaineCreate`](crate::model::DomaineCreate) payload, and the compiler
/// rejects anything else.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The unique identifier within the collection.
    type Id: Eq + Clone + Display + Debug + Send + Sync;

    /// Body of the create request.
    type CreatePayload: Serialize + Debug + Send + Sync;

    /// Body of the update request; all fields optional.
    type UpdatePayload: Serialize + Debug + Send + Sync;

    /// Route segment, e.g. `"Domaine"` in `/api/ListDomaine`.
    const NAME: &'static str;

    /// Lowercase plural used in log lines and fallback error messages.
    const PLURAL: &'static str;

    /// Where the list endpoint puts the collection.
    const SHAPE: CollectionShape;

    fn id(&self) -> Self::Id;
}

/// Marker for entities whose API exposes a count endpoint
/// (`GET /api/Nombre<NAME>`). The scalar is independently fetched and is not
/// required to agree with the cached collection's length.
pub trait Countable: Resource {
    /// Field wrapping the scalar in the count response.
    const COUNT_FIELD: &'static str;
}

/// How a list endpoint wraps its collection.
///
/// The endpoints are inconsistent about this (students nest under `data`,
/// teams two levels down, domains answer bare or wrapped), so each entity
/// declares its rule here instead of optional-chaining at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionShape {
    /// The response body is the array itself.
    Bare,
    /// A bare array, or an object carrying the array under `data`.
    BareOrData,
    /// The array is nested under `data`.
    Data,
    /// The array is nested two levels down, under `data.<field>`.
    NestedData(&'static str),
}

impl CollectionShape {
    /// Pulls the collection out of a list-response body.
    ///
    /// A body that does not match the declared shape yields the empty
    /// collection: a shapeless list response empties the cache rather than
    /// erroring.
    pub fn extract(self, body: &Value) -> Vec<Value> {
        let found = match self {
            CollectionShape::Bare => body.as_array(),
            CollectionShape::BareOrData => body
                .as_array()
                .or_else(|| body.get("data").and_then(Value::as_array)),
            CollectionShape::Data => body.get("data").and_then(Value::as_array),
            CollectionShape::NestedData(field) => body
                .get("data")
                .and_then(|data| data.get(field))
                .and_then(Value::as_array),
        };
        found.cloned().unwrap_or_default()
    }
}
