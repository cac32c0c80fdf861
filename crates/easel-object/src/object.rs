//! Saved-object records and references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Directed pointer from one saved object to another, embedded in the
/// source object's record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Id of the target object
    pub id: String,
    /// Kind of the target object
    #[serde(rename = "type")]
    pub kind: String,
}

impl Reference {
    /// Create a reference to `[kind:id]`
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// Kind/id pair addressing a single saved object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey {
    /// Kind of the addressed object
    #[serde(rename = "type")]
    pub kind: String,
    /// Id of the addressed object
    pub id: String,
}

impl ObjectKey {
    /// Create a key for `[kind:id]`
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

impl From<&Reference> for ObjectKey {
    fn from(reference: &Reference) -> Self {
        Self {
            kind: reference.kind.clone(),
            id: reference.id.clone(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.kind, self.id)
    }
}

/// A stored document: kind, id, an open attribute document, and
/// outbound references to other saved objects.
///
/// `attributes` is schemaless by design. Each kind owns its own
/// attribute shape; this layer only ever reads the shared `title`
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedObject {
    /// Object id, unique within its kind
    pub id: String,
    /// Object kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific attribute document
    #[serde(default)]
    pub attributes: Value,
    /// Outbound references; absent in the wire form means empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    /// Last modification stamp, if the store tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedObject {
    /// Create an empty object of the given kind
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            attributes: Value::Null,
            references: Vec::new(),
            updated_at: None,
        }
    }

    /// Key addressing this object
    #[inline]
    #[must_use]
    pub fn key(&self) -> ObjectKey {
        ObjectKey {
            kind: self.kind.clone(),
            id: self.id.clone(),
        }
    }

    /// The `title` attribute, when present and a string
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }

    /// Whether this object holds a reference to the given target
    #[must_use]
    pub fn references_key(&self, target: &ObjectKey) -> bool {
        self.references
            .iter()
            .any(|reference| reference.kind == target.kind && reference.id == target.id)
    }
}
