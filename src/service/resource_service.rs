//! Maps store operations onto the admin API's route families.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::api::{ApiError, Method, OperationFailed, Transport};
use crate::resource::{Countable, Resource};

/// One entity's bindings onto the `/api/{List,Store,Update,Delete,Nombre}<NAME>`
/// route family.
///
/// The service is stateless: no cache, no retries, no lifecycle flags — that
/// bookkeeping belongs to the [`ResourceStore`](crate::store::ResourceStore)
/// that owns this service. Its one policy decision is error normalization:
/// every transport failure is re-raised as [`OperationFailed`] with the
/// server's message when present, else a fixed per-operation fallback.
pub struct ResourceService<R: Resource> {
    transport: Arc<dyn Transport>,
    _entity: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    /// Fetches the whole collection, extracted through the entity's
    /// [`CollectionShape`](crate::resource::CollectionShape) rule.
    pub async fn list(&self) -> Result<Vec<R>, OperationFailed> {
        let path = format!("/api/List{}", R::NAME);
        let fallback = format!("failed to load {}", R::PLURAL);
        let body = self.request(Method::Get, &path, None, &fallback).await?;

        let entries = R::SHAPE.extract(&body);
        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let item = serde_json::from_value(entry)
                .map_err(|e| OperationFailed::normalize(ApiError::Decode(e.to_string()), &fallback))?;
            items.push(item);
        }
        Ok(items)
    }

    /// Creates an entity. Returns the server-confirmed record, which may
    /// differ from the submitted payload (generated id, server defaults).
    pub async fn create(&self, payload: &R::CreatePayload) -> Result<R, OperationFailed> {
        let path = format!("/api/Store{}", R::NAME);
        let fallback = format!("failed to create {}", R::NAME.to_lowercase());
        let body = encode(payload, &fallback)?;
        let response = self.request(Method::Post, &path, Some(body), &fallback).await?;

        serde_json::from_value(unwrap_data(response))
            .map_err(|e| OperationFailed::normalize(ApiError::Decode(e.to_string()), &fallback))
    }

    /// Updates an entity. The response carries only the fields that changed;
    /// merging them into the cached record is the store's job.
    pub async fn update(
        &self,
        id: &R::Id,
        payload: &R::UpdatePayload,
    ) -> Result<Value, OperationFailed> {
        let path = format!("/api/Update{}/{}", R::NAME, id);
        let fallback = format!("failed to update {}", R::NAME.to_lowercase());
        let body = encode(payload, &fallback)?;
        let response = self.request(Method::Post, &path, Some(body), &fallback).await?;
        Ok(unwrap_data(response))
    }

    /// Deletes an entity. The response body is ignored beyond success.
    pub async fn delete(&self, id: &R::Id) -> Result<(), OperationFailed> {
        let path = format!("/api/Delete{}/{}", R::NAME, id);
        let fallback = format!("failed to delete {}", R::NAME.to_lowercase());
        self.request(Method::Post, &path, None, &fallback).await?;
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        fallback: &str,
    ) -> Result<Value, OperationFailed> {
        debug!(entity = R::NAME, %method, path, "request");
        self.transport
            .request(method, path, body)
            .await
            .map_err(|e| OperationFailed::normalize(e, fallback))
    }
}

impl<R: Countable> ResourceService<R> {
    /// Fetches the server-side collection size, independent of any cache.
    pub async fn count(&self) -> Result<u64, OperationFailed> {
        let path = format!("/api/Nombre{}", R::NAME);
        let fallback = format!("failed to count {}", R::PLURAL);
        let body = self.request(Method::Get, &path, None, &fallback).await?;

        body.get(R::COUNT_FIELD).and_then(Value::as_u64).ok_or_else(|| {
            OperationFailed::normalize(
                ApiError::Decode(format!("missing `{}` field", R::COUNT_FIELD)),
                &fallback,
            )
        })
    }
}

/// Create and update responses sometimes wrap the record in a `data` envelope.
fn unwrap_data(response: Value) -> Value {
    match response {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn encode<P: serde::Serialize>(payload: &P, fallback: &str) -> Result<Value, OperationFailed> {
    serde_json::to_value(payload)
        .map_err(|e| OperationFailed::normalize(ApiError::Decode(e.to_string()), fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_data_strips_the_envelope_when_present() {
        assert_eq!(
            unwrap_data(json!({"data": {"id": 1, "titre": "IA"}})),
            json!({"id": 1, "titre": "IA"})
        );
        assert_eq!(
            unwrap_data(json!({"id": 1, "titre": "IA"})),
            json!({"id": 1, "titre": "IA"})
        );
    }
}
