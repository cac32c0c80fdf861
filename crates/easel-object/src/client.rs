//! Saved-object client capability trait and query types.

use crate::error::ObjectError;
use crate::object::{ObjectKey, SavedObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default page size for [`FindQuery`]
pub(crate) const DEFAULT_PER_PAGE: usize = 20;

/// Query for [`SavedObjectsClient::find`]
///
/// `types` is always an allow-list: objects of any other kind never
/// match, whatever the rest of the query says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindQuery {
    /// Kinds eligible to match
    #[serde(rename = "type")]
    pub types: Vec<String>,
    /// Restrict matches to objects referencing this target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_reference: Option<ObjectKey>,
    /// Maximum number of objects returned
    pub per_page: usize,
    /// Attribute fields to keep in matched objects; empty keeps all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Case-insensitive title substring filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FindQuery {
    /// Query matching the given kinds with default paging
    #[must_use]
    pub fn of_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            has_reference: None,
            per_page: DEFAULT_PER_PAGE,
            fields: Vec::new(),
            search: None,
        }
    }

    /// Restrict matches to objects referencing `target`
    #[inline]
    #[must_use]
    pub fn with_reference(mut self, target: ObjectKey) -> Self {
        self.has_reference = Some(target);
        self
    }

    /// Cap the result set at `per_page` objects
    #[inline]
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Project matched attribute documents down to the given fields
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Filter matches by a case-insensitive title substring
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Result page from [`SavedObjectsClient::find`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindResponse {
    /// Objects matching the query, truncated to `per_page`
    pub saved_objects: Vec<SavedObject>,
    /// Total matches before truncation
    pub total: usize,
    /// Page size the query asked for
    pub per_page: usize,
}

impl FindResponse {
    /// Empty result page
    #[inline]
    #[must_use]
    pub fn empty(per_page: usize) -> Self {
        Self {
            saved_objects: Vec::new(),
            total: 0,
            per_page,
        }
    }
}

/// Result set from [`SavedObjectsClient::bulk_get`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkGetResponse {
    /// Objects found, in request order
    pub saved_objects: Vec<SavedObject>,
}

impl BulkGetResponse {
    /// Empty result set
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            saved_objects: Vec::new(),
        }
    }
}

/// Capability surface of a saved-object store.
///
/// Implementations own transport, storage, and authorization; this
/// trait only fixes the read contract the rest of the workspace builds
/// on. All methods are side-effect-free reads.
#[async_trait]
pub trait SavedObjectsClient: Send + Sync {
    /// Fetch a single object.
    ///
    /// # Errors
    /// [`ObjectError::NotFound`] when no object has the given kind/id.
    async fn get(&self, kind: &str, id: &str) -> Result<SavedObject, ObjectError>;

    /// Fetch a batch of objects by key, preserving request order.
    ///
    /// An empty request list yields an empty response. Keys with no
    /// matching object are skipped, not errors.
    ///
    /// # Errors
    /// Transport or permission failures only.
    async fn bulk_get(&self, keys: &[ObjectKey]) -> Result<BulkGetResponse, ObjectError>;

    /// Search objects matching the query.
    ///
    /// # Errors
    /// Transport or permission failures only; zero matches is an empty
    /// response, not an error.
    async fn find(&self, query: &FindQuery) -> Result<FindResponse, ObjectError>;
}
