//! Easel Relationship Resolution
//!
//! Resolves both directions of the reference relation for one saved
//! object: the objects it points to (outbound) and the objects that
//! point back at it (inbound), grouped by kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_relations::{find_relationships, RelationshipOptions};
//!
//! let map = find_relationships("dashboard", "d1", RelationshipOptions {
//!     size: 10,
//!     client: &store,
//!     object_types: &types,
//! })
//! .await?;
//!
//! for (kind, entries) in &map {
//!     println!("{kind}: {} related objects", entries.len());
//! }
//! ```

// Core modules
mod map;
mod resolver;

// Re-exports
pub use map::{group_by_kind, RelationshipEntry, RelationshipMap, SavedObjectSummary};
pub use resolver::{find_relationships, RelationshipOptions};
