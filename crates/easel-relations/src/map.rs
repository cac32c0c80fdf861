//! Grouped relationship results.

use easel_object::SavedObject;
use indexmap::IndexMap;
use serde::Serialize;

/// Minimal projection of a saved object used in relationship output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedObjectSummary {
    /// Object id
    pub id: String,
    /// Object kind
    #[serde(rename = "type")]
    pub kind: String,
    /// `title` attribute; `None` when the object carries none
    pub title: Option<String>,
}

impl From<&SavedObject> for SavedObjectSummary {
    fn from(object: &SavedObject) -> Self {
        Self {
            id: object.id.clone(),
            kind: object.kind.clone(),
            title: object.title().map(str::to_owned),
        }
    }
}

/// One grouped relationship; its kind is the map key, so it is
/// stripped from the entry itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipEntry {
    /// Object id
    pub id: String,
    /// `title` attribute; `None` when the object carries none
    pub title: Option<String>,
}

/// Relationships grouped by kind.
///
/// Keys appear in first-seen order, entries in arrival order within
/// each group. Kinds with no relationships have no key at all, never
/// an empty vector.
pub type RelationshipMap = IndexMap<String, Vec<RelationshipEntry>>;

/// Group summaries by kind, preserving arrival order
#[must_use]
pub fn group_by_kind(summaries: impl IntoIterator<Item = SavedObjectSummary>) -> RelationshipMap {
    let mut map = RelationshipMap::new();
    for summary in summaries {
        map.entry(summary.kind).or_default().push(RelationshipEntry {
            id: summary.id,
            title: summary.title,
        });
    }
    map
}
