//! In-memory saved-object store.
//!
//! An in-process [`SavedObjectsClient`] backed by a concurrent map,
//! used by tests and the demo binary. Find results are ordered by
//! kind then id so output is deterministic across runs.

use crate::client::{BulkGetResponse, FindQuery, FindResponse, SavedObjectsClient};
use crate::error::ObjectError;
use crate::object::{ObjectKey, SavedObject};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};

/// Concurrent in-memory store keyed by `[kind:id]`
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: DashMap<ObjectKey, SavedObject>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object, returning any displaced object with the same key
    pub fn insert(&self, object: SavedObject) -> Option<SavedObject> {
        self.objects.insert(object.key(), object)
    }

    /// Remove an object by key
    pub fn remove(&self, key: &ObjectKey) -> Option<SavedObject> {
        self.objects.remove(key).map(|(_, object)| object)
    }

    /// Number of stored objects
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn matches(query: &FindQuery, object: &SavedObject) -> bool {
        if !query.types.iter().any(|kind| kind == &object.kind) {
            return false;
        }
        if let Some(target) = &query.has_reference {
            if !object.references_key(target) {
                return false;
            }
        }
        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            let title_matches = object
                .title()
                .is_some_and(|title| title.to_lowercase().contains(&needle));
            if !title_matches {
                return false;
            }
        }
        true
    }

    // Keeps only the requested top-level attribute fields.
    fn project(mut object: SavedObject, fields: &[String]) -> SavedObject {
        if fields.is_empty() {
            return object;
        }
        let projected = match &object.attributes {
            Value::Object(attributes) => {
                let mut kept = Map::new();
                for field in fields {
                    if let Some(value) = attributes.get(field) {
                        kept.insert(field.clone(), value.clone());
                    }
                }
                Value::Object(kept)
            }
            _ => Value::Null,
        };
        object.attributes = projected;
        object
    }
}

#[async_trait]
impl SavedObjectsClient for MemoryStore {
    async fn get(&self, kind: &str, id: &str) -> Result<SavedObject, ObjectError> {
        let key = ObjectKey::new(kind, id);
        self.objects
            .get(&key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ObjectError::not_found(kind, id))
    }

    async fn bulk_get(&self, keys: &[ObjectKey]) -> Result<BulkGetResponse, ObjectError> {
        let saved_objects = keys
            .iter()
            .filter_map(|key| self.objects.get(key).map(|entry| entry.value().clone()))
            .collect();
        Ok(BulkGetResponse { saved_objects })
    }

    async fn find(&self, query: &FindQuery) -> Result<FindResponse, ObjectError> {
        let mut matched: Vec<SavedObject> = self
            .objects
            .iter()
            .filter(|entry| Self::matches(query, entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matched.sort_by(|a, b| (&a.kind, &a.id).cmp(&(&b.kind, &b.id)));

        let total = matched.len();
        tracing::debug!(total, per_page = query.per_page, "memory store find");

        matched.truncate(query.per_page);
        let saved_objects = matched
            .into_iter()
            .map(|object| Self::project(object, &query.fields))
            .collect();

        Ok(FindResponse {
            saved_objects,
            total,
            per_page: query.per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Reference;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn titled(kind: &str, id: &str, title: &str) -> SavedObject {
        let mut object = SavedObject::new(kind, id);
        object.attributes = json!({"title": title, "state": {"zoom": 3}});
        object
    }

    #[tokio::test]
    async fn get_round_trips() {
        let store = MemoryStore::new();
        store.insert(titled("dashboard", "d1", "Ops"));

        let object = store.get("dashboard", "d1").await.unwrap();
        assert_eq!(object.title(), Some("Ops"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryStore::new();
        let error = store.get("dashboard", "nope").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn bulk_get_preserves_request_order_and_skips_missing() {
        let store = MemoryStore::new();
        store.insert(titled("visualization", "v1", "One"));
        store.insert(titled("visualization", "v2", "Two"));

        let keys = vec![
            ObjectKey::new("visualization", "v2"),
            ObjectKey::new("visualization", "missing"),
            ObjectKey::new("visualization", "v1"),
        ];
        let response = store.bulk_get(&keys).await.unwrap();

        let ids: Vec<&str> = response
            .saved_objects
            .iter()
            .map(|object| object.id.as_str())
            .collect();
        assert_eq!(ids, vec!["v2", "v1"]);
    }

    #[tokio::test]
    async fn find_filters_by_kind_allow_list() {
        let store = MemoryStore::new();
        store.insert(titled("visualization", "v1", "One"));
        store.insert(titled("search", "s1", "Saved search"));

        let response = store
            .find(&FindQuery::of_types(["visualization"]))
            .await
            .unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.saved_objects[0].id, "v1");
    }

    #[tokio::test]
    async fn find_filters_by_reference() {
        let store = MemoryStore::new();
        let mut pointing = titled("visualization", "v1", "One");
        pointing.references = vec![Reference::new("index-pattern", "ip1")];
        store.insert(pointing);
        store.insert(titled("visualization", "v2", "Two"));

        let query = FindQuery::of_types(["visualization"])
            .with_reference(ObjectKey::new("index-pattern", "ip1"));
        let response = store.find(&query).await.unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(response.saved_objects[0].id, "v1");
    }

    #[tokio::test]
    async fn find_truncates_to_per_page_but_reports_total() {
        let store = MemoryStore::new();
        for index in 0..5 {
            store.insert(titled("visualization", &format!("v{index}"), "t"));
        }

        let query = FindQuery::of_types(["visualization"]).with_per_page(2);
        let response = store.find(&query).await.unwrap();

        assert_eq!(response.saved_objects.len(), 2);
        assert_eq!(response.total, 5);
    }

    #[tokio::test]
    async fn find_projects_attribute_fields() {
        let store = MemoryStore::new();
        store.insert(titled("visualization", "v1", "One"));

        let query = FindQuery::of_types(["visualization"]).with_fields(["title"]);
        let response = store.find(&query).await.unwrap();

        assert_eq!(
            response.saved_objects[0].attributes,
            json!({"title": "One"})
        );
    }

    #[tokio::test]
    async fn find_search_matches_title_substring() {
        let store = MemoryStore::new();
        store.insert(titled("visualization", "v1", "Traffic by region"));
        store.insert(titled("visualization", "v2", "Error budget"));

        let query = FindQuery::of_types(["visualization"]).with_search("traffic");
        let response = store.find(&query).await.unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(response.saved_objects[0].id, "v1");
    }

    #[tokio::test]
    async fn find_orders_by_kind_then_id() {
        let store = MemoryStore::new();
        store.insert(titled("visualization", "v2", "b"));
        store.insert(titled("search", "s1", "c"));
        store.insert(titled("visualization", "v1", "a"));

        let response = store
            .find(&FindQuery::of_types(["visualization", "search"]))
            .await
            .unwrap();
        let ids: Vec<&str> = response
            .saved_objects
            .iter()
            .map(|object| object.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "v1", "v2"]);
    }
}
