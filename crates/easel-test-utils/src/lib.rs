//! Testing utilities for the easel workspace
//!
//! Shared fixtures and instrumented client wrappers.

#![allow(missing_docs)]

use async_trait::async_trait;
use easel_object::{
    BulkGetResponse, FindQuery, FindResponse, MemoryStore, ObjectError, ObjectKey, Reference,
    SavedObject, SavedObjectsClient,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn object(kind: &str, id: &str) -> SavedObject {
    SavedObject::new(kind, id)
}

pub fn titled_object(kind: &str, id: &str, title: &str) -> SavedObject {
    let mut object = SavedObject::new(kind, id);
    object.attributes = json!({ "title": title });
    object
}

pub fn object_with_references(
    kind: &str,
    id: &str,
    title: &str,
    references: &[(&str, &str)],
) -> SavedObject {
    let mut object = titled_object(kind, id, title);
    object.references = references
        .iter()
        .map(|(reference_kind, reference_id)| Reference::new(*reference_kind, *reference_id))
        .collect();
    object
}

pub fn seeded_store(objects: impl IntoIterator<Item = SavedObject>) -> MemoryStore {
    let store = MemoryStore::new();
    for object in objects {
        store.insert(object);
    }
    store
}

/// Client wrapper counting how often each read method is invoked.
///
/// Lets tests assert on call behavior (e.g. that an empty batch issues
/// no bulk-get at all) without a mocking framework.
#[derive(Debug)]
pub struct RecordingClient<C> {
    inner: C,
    gets: AtomicUsize,
    bulk_gets: AtomicUsize,
    finds: AtomicUsize,
}

impl<C> RecordingClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            bulk_gets: AtomicUsize::new(0),
            finds: AtomicUsize::new(0),
        }
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn bulk_get_calls(&self) -> usize {
        self.bulk_gets.load(Ordering::SeqCst)
    }

    pub fn find_calls(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<C: SavedObjectsClient> SavedObjectsClient for RecordingClient<C> {
    async fn get(&self, kind: &str, id: &str) -> Result<SavedObject, ObjectError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(kind, id).await
    }

    async fn bulk_get(&self, keys: &[ObjectKey]) -> Result<BulkGetResponse, ObjectError> {
        self.bulk_gets.fetch_add(1, Ordering::SeqCst);
        self.inner.bulk_get(keys).await
    }

    async fn find(&self, query: &FindQuery) -> Result<FindResponse, ObjectError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find(query).await
    }
}

/// Client wrapper failing selected methods with a transport error.
///
/// Used to exercise the fail-fast join: either concurrent read failing
/// must fail the whole operation.
#[derive(Debug)]
pub struct FaultInjectingClient<C> {
    inner: C,
    fail_bulk_get: bool,
    fail_find: bool,
}

impl<C> FaultInjectingClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            fail_bulk_get: false,
            fail_find: false,
        }
    }

    #[must_use]
    pub fn failing_bulk_get(mut self) -> Self {
        self.fail_bulk_get = true;
        self
    }

    #[must_use]
    pub fn failing_find(mut self) -> Self {
        self.fail_find = true;
        self
    }
}

#[async_trait]
impl<C: SavedObjectsClient> SavedObjectsClient for FaultInjectingClient<C> {
    async fn get(&self, kind: &str, id: &str) -> Result<SavedObject, ObjectError> {
        self.inner.get(kind, id).await
    }

    async fn bulk_get(&self, keys: &[ObjectKey]) -> Result<BulkGetResponse, ObjectError> {
        if self.fail_bulk_get {
            return Err(ObjectError::Transport("injected bulk_get failure".into()));
        }
        self.inner.bulk_get(keys).await
    }

    async fn find(&self, query: &FindQuery) -> Result<FindResponse, ObjectError> {
        if self.fail_find {
            return Err(ObjectError::Transport("injected find failure".into()));
        }
        self.inner.find(query).await
    }
}
