//! # The Resource Store Engine
//!
//! One [`ResourceStore`] per entity type owns the authoritative client-side
//! copy of that collection. Written once against the
//! [`Resource`](crate::resource::Resource) trait, it is reused unchanged for
//! domains, students, teams and trials.
//!
//! ## State machine
//!
//! Every network-backed operation drives the per-store
//! [`RequestLifecycle`]: `Idle → Loading → {Succeeded, Failed}`. Reads
//! (`list`, `count`) never touch the `success` flag; mutations (`create`,
//! `update`, `delete`) own it. Failures record the normalized message and
//! re-raise the error, so callers can notify without re-deriving it.
//!
//! ## Cache-patch rules
//!
//! - `list` replaces the cache wholesale with the server collection.
//! - `create` appends the server-confirmed record (arrival order).
//! - `update` shallow-merges the returned fields over the matching entry;
//!   fields absent from the response keep their cached value.
//! - `delete` removes the matching entry; removal is idempotent.
//!
//! ## Concurrency Model
//!
//! Stores are `&self` async and safe to share behind an `Arc`. State sits
//! behind an `RwLock` that is never held across an await: an operation
//! stamps its entry flags, suspends at the network boundary unlocked, and
//! applies its settlement atomically when the call resolves. Nothing orders
//! overlapping calls to the same store — the last settlement wins, which is
//! accepted for a single-user admin console. Bulk mutations against one
//! store need external coordination.

use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::lifecycle::RequestLifecycle;
use crate::api::{OperationFailed, Transport};
use crate::resource::{Countable, Resource};
use crate::service::ResourceService;

struct StoreState<R: Resource> {
    items: Vec<R>,
    current: Option<R>,
    remote_count: Option<u64>,
    lifecycle: RequestLifecycle,
}

impl<R: Resource> Default for StoreState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            remote_count: None,
            lifecycle: RequestLifecycle::default(),
        }
    }
}

/// Client-side cache and request-lifecycle tracker for one entity type.
pub struct ResourceStore<R: Resource> {
    service: ResourceService<R>,
    state: RwLock<StoreState<R>>,
}

impl<R: Resource> ResourceStore<R> {
    /// Builds a store over an injected transport. Explicit construction —
    /// tests build isolated stores over a
    /// [`MockTransport`](super::mock::MockTransport), the application builds
    /// them over [`HttpTransport`](crate::api::HttpTransport).
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            service: ResourceService::new(transport),
            state: RwLock::new(StoreState::default()),
        }
    }

    // =========================================================================
    // Network-backed operations (the only code that touches cache + lifecycle)
    // =========================================================================

    /// Fetches the collection and replaces the cache wholesale. The previous
    /// cache is discarded, not merged.
    pub async fn list(&self) -> Result<Vec<R>, OperationFailed> {
        self.state.write().unwrap().lifecycle.begin_read();
        debug!(entity = R::NAME, "list");

        match self.service.list().await {
            Ok(items) => {
                let mut state = self.state.write().unwrap();
                state.items = items.clone();
                state.lifecycle.settle_read_ok();
                info!(entity = R::NAME, size = items.len(), "listed");
                Ok(items)
            }
            Err(e) => Err(self.settle_read_failure("list", e)),
        }
    }

    /// Creates an entity and appends the server-confirmed record to the
    /// cache. Required-field validation is the caller's job; the store
    /// submits the payload as given.
    pub async fn create(&self, payload: R::CreatePayload) -> Result<R, OperationFailed> {
        self.state.write().unwrap().lifecycle.begin_mutation();
        debug!(entity = R::NAME, ?payload, "create");

        match self.service.create(&payload).await {
            Ok(item) => {
                let mut state = self.state.write().unwrap();
                state.items.push(item.clone());
                state.lifecycle.settle_mutation_ok();
                info!(entity = R::NAME, id = %item.id(), size = state.items.len(), "created");
                Ok(item)
            }
            Err(e) => Err(self.settle_mutation_failure("create", e)),
        }
    }

    /// Updates an entity and patches the matching cache entry with a shallow
    /// merge of the returned fields. Returns the merged record, or `None`
    /// when the id is not (or no longer) in the cache — the server-side
    /// update still counts as a success.
    pub async fn update(
        &self,
        id: R::Id,
        payload: R::UpdatePayload,
    ) -> Result<Option<R>, OperationFailed> {
        self.state.write().unwrap().lifecycle.begin_mutation();
        debug!(entity = R::NAME, %id, ?payload, "update");

        match self.service.update(&id, &payload).await {
            Ok(patch) => {
                let mut state = self.state.write().unwrap();
                let merged = apply_patch(&mut state.items, &id, &patch);
                state.lifecycle.settle_mutation_ok();
                info!(entity = R::NAME, %id, patched = merged.is_some(), "updated");
                Ok(merged)
            }
            Err(e) => Err(self.settle_mutation_failure("update", e)),
        }
    }

    /// Deletes an entity and removes the matching cache entry. Removal is
    /// idempotent: an id with no cache entry leaves the cache unchanged and
    /// raises no error. The current selection is deliberately left alone
    /// even when it references the deleted entity (see [`set_current`](Self::set_current)).
    pub async fn delete(&self, id: R::Id) -> Result<(), OperationFailed> {
        self.state.write().unwrap().lifecycle.begin_mutation();
        debug!(entity = R::NAME, %id, "delete");

        match self.service.delete(&id).await {
            Ok(()) => {
                let mut state = self.state.write().unwrap();
                state.items.retain(|item| item.id() != id);
                state.lifecycle.settle_mutation_ok();
                info!(entity = R::NAME, %id, size = state.items.len(), "deleted");
                Ok(())
            }
            Err(e) => Err(self.settle_mutation_failure("delete", e)),
        }
    }

    fn settle_read_failure(&self, op: &str, e: OperationFailed) -> OperationFailed {
        warn!(entity = R::NAME, op, error = %e, "operation failed");
        self.state
            .write()
            .unwrap()
            .lifecycle
            .settle_read_err(e.message.clone());
        e
    }

    fn settle_mutation_failure(&self, op: &str, e: OperationFailed) -> OperationFailed {
        warn!(entity = R::NAME, op, error = %e, "operation failed");
        self.state
            .write()
            .unwrap()
            .lifecycle
            .settle_mutation_err(e.message.clone());
        e
    }

    // =========================================================================
    // Synchronous state access (no network, no lifecycle changes)
    // =========================================================================

    /// Snapshot of the cached collection, in cache order.
    pub fn items(&self) -> Vec<R> {
        self.state.read().unwrap().items.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().unwrap().items.is_empty()
    }

    /// Looks an entity up by id in the cache.
    pub fn find(&self, id: &R::Id) -> Option<R> {
        self.state
            .read()
            .unwrap()
            .items
            .iter()
            .find(|item| item.id() == *id)
            .cloned()
    }

    /// Entities matching a predicate, in cache order.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.state
            .read()
            .unwrap()
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Number of cached entities matching a predicate.
    pub fn count_where(&self, predicate: impl Fn(&R) -> bool) -> usize {
        self.state
            .read()
            .unwrap()
            .items
            .iter()
            .filter(|item| predicate(item))
            .count()
    }

    /// Snapshot of the lifecycle flags.
    pub fn lifecycle(&self) -> RequestLifecycle {
        self.state.read().unwrap().lifecycle.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap().lifecycle.loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().unwrap().lifecycle.error.clone()
    }

    pub fn succeeded(&self) -> bool {
        self.state.read().unwrap().lifecycle.success
    }

    /// The last count fetched from the server, if any. Stored next to the
    /// cache, never derived from it; the two are independently fetched.
    pub fn remote_count(&self) -> Option<u64> {
        self.state.read().unwrap().remote_count
    }

    /// The entity currently under edit, if any.
    pub fn current(&self) -> Option<R> {
        self.state.read().unwrap().current.clone()
    }

    /// Sets (or clears) the entity under edit. Pure selection state: it is
    /// not validated against the cache, and it is **not** cleared when the
    /// entity it references is later deleted — callers that want that
    /// cleanup do it themselves.
    pub fn set_current(&self, entity: Option<R>) {
        self.state.write().unwrap().current = entity;
    }

    /// Clears the error flag only.
    pub fn clear_error(&self) {
        self.state.write().unwrap().lifecycle.error = None;
    }

    /// Clears the success flag only.
    pub fn clear_success(&self) {
        self.state.write().unwrap().lifecycle.success = false;
    }

    /// Resets all lifecycle flags. The cache and the selection are untouched.
    pub fn reset(&self) {
        self.state.write().unwrap().lifecycle = RequestLifecycle::default();
    }
}

impl<R: Countable> ResourceStore<R> {
    /// Fetches the server-side collection size and stores it separately from
    /// the cache. A read: the `success` flag is left untouched.
    pub async fn count(&self) -> Result<u64, OperationFailed> {
        self.state.write().unwrap().lifecycle.begin_read();
        debug!(entity = R::NAME, "count");

        match self.service.count().await {
            Ok(n) => {
                let mut state = self.state.write().unwrap();
                state.remote_count = Some(n);
                state.lifecycle.settle_read_ok();
                info!(entity = R::NAME, count = n, "counted");
                Ok(n)
            }
            Err(e) => Err(self.settle_read_failure("count", e)),
        }
    }
}

/// Shallow-merges an update response over the cached entry with the target
/// id. Fields absent from the patch keep their cached value. A patch that
/// does not deserialize back into the entity is discarded; the cache entry
/// is left as it was.
fn apply_patch<R: Resource>(items: &mut [R], id: &R::Id, patch: &Value) -> Option<R> {
    let slot = items.iter_mut().find(|item| item.id() == *id)?;

    let mut base = match serde_json::to_value(&*slot) {
        Ok(value) => value,
        Err(e) => {
            warn!(entity = R::NAME, %id, error = %e, "cached entry not serializable");
            return None;
        }
    };
    if let (Some(base_map), Some(patch_map)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_map {
            base_map.insert(key.clone(), value.clone());
        }
    }

    match serde_json::from_value::<R>(base) {
        Ok(merged) => {
            *slot = merged.clone();
            Some(merged)
        }
        Err(e) => {
            warn!(entity = R::NAME, %id, error = %e, "discarding unmergeable patch");
            None
        }
    }
}

// =============================================================================
// Unit tests: cache-patch rules and lifecycle transitions over a scripted
// transport. End-to-end properties live in tests/store_test.rs.
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Method};
    use crate::model::{Domaine, DomaineCreate, DomaineUpdate};
    use crate::store::mock::MockTransport;
    use serde_json::json;

    fn store_with(mock: &MockTransport) -> ResourceStore<Domaine> {
        ResourceStore::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn list_replaces_the_cache_wholesale() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "IA"}, {"id": 2, "titre": "Web"}]));
        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 2);

        // A second list discards the previous cache entirely.
        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!({"data": [{"id": 9, "titre": "Jeux"}]}));
        store.list().await.unwrap();
        assert_eq!(store.items(), vec![Domaine { id: 9, titre: "Jeux".into() }]);

        // Reads never set success.
        assert!(!store.succeeded());
        mock.verify();
    }

    #[tokio::test]
    async fn create_appends_in_arrival_order() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "IA"}]));
        store.list().await.unwrap();

        mock.expect(Method::Post, "/api/StoreDomaine")
            .return_ok(json!({"data": {"id": 5, "titre": "Robotique"}}));
        let created = store.create(DomaineCreate { titre: "Robotique".into() }).await.unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1].titre, "Robotique");
        assert!(store.succeeded());
        mock.verify();
    }

    #[tokio::test]
    async fn update_merges_and_preserves_missing_fields() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "a"}]));
        store.list().await.unwrap();

        // Response carries only the changed field.
        mock.expect(Method::Post, "/api/UpdateDomaine/1")
            .return_ok(json!({"titre": "b"}));
        let merged = store
            .update(1, DomaineUpdate { titre: Some("b".into()) })
            .await
            .unwrap();

        assert_eq!(merged, Some(Domaine { id: 1, titre: "b".into() }));
        assert_eq!(store.find(&1).unwrap().titre, "b");
        assert_eq!(store.find(&1).unwrap().id, 1, "id not present in patch is preserved");
        mock.verify();
    }

    #[tokio::test]
    async fn update_of_uncached_id_still_succeeds() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Post, "/api/UpdateDomaine/42")
            .return_ok(json!({"titre": "b"}));
        let merged = store
            .update(42, DomaineUpdate { titre: Some("b".into()) })
            .await
            .unwrap();

        assert_eq!(merged, None);
        assert!(store.is_empty());
        assert!(store.succeeded());
        mock.verify();
    }

    #[tokio::test]
    async fn delete_is_idempotent_on_the_cache() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "IA"}]));
        store.list().await.unwrap();

        // Deleting an id with no cache entry changes nothing and raises nothing.
        mock.expect(Method::Post, "/api/DeleteDomaine/2").return_ok(json!(null));
        store.delete(2).await.unwrap();
        assert_eq!(store.len(), 1);

        mock.expect(Method::Post, "/api/DeleteDomaine/1").return_ok(json!(null));
        store.delete(1).await.unwrap();
        assert!(store.is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn failure_settles_flags_and_leaves_cache_alone() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "IA"}]));
        store.list().await.unwrap();
        let before = store.items();

        mock.expect(Method::Post, "/api/StoreDomaine").return_err(ApiError::Status {
            status: 500,
            message: None,
        });
        let err = store
            .create(DomaineCreate { titre: "Web".into() })
            .await
            .unwrap_err();

        assert_eq!(err.message, "failed to create domaine");
        assert!(!store.is_loading());
        assert!(!store.succeeded());
        assert_eq!(store.error().as_deref(), Some("failed to create domaine"));
        assert_eq!(store.items(), before, "cache unchanged on failure");

        // The server's own message wins over the fallback when present.
        mock.expect(Method::Get, "/api/ListDomaine").return_err(ApiError::Status {
            status: 503,
            message: Some("base indisponible".into()),
        });
        let err = store.list().await.unwrap_err();
        assert_eq!(err.message, "base indisponible");
        assert_eq!(store.error().as_deref(), Some("base indisponible"));
        mock.verify();
    }

    #[tokio::test]
    async fn count_is_independent_of_cache_length() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "IA"}]));
        store.list().await.unwrap();

        // Server reports more than we have cached; both values stand.
        mock.expect(Method::Get, "/api/NombreDomaine")
            .return_ok(json!({"nombre": 12}));
        assert_eq!(store.count().await.unwrap(), 12);
        assert_eq!(store.remote_count(), Some(12));
        assert_eq!(store.len(), 1);
        assert!(!store.succeeded(), "count is a read, success untouched");
        mock.verify();
    }

    #[tokio::test]
    async fn flag_clearing_leaves_the_cache_untouched() {
        let mock = MockTransport::new();
        let store = store_with(&mock);

        mock.expect(Method::Get, "/api/ListDomaine")
            .return_ok(json!([{"id": 1, "titre": "IA"}]));
        store.list().await.unwrap();

        mock.expect(Method::Post, "/api/DeleteDomaine/9").return_err(ApiError::Network(
            "connection reset".into(),
        ));
        store.delete(9).await.unwrap_err();

        store.clear_error();
        assert_eq!(store.error(), None);
        store.clear_success();
        assert!(!store.succeeded());
        store.reset();
        assert_eq!(store.lifecycle(), RequestLifecycle::default());
        assert_eq!(store.len(), 1);
        mock.verify();
    }
}
