//! Easel Saved-Object Model
//!
//! Core domain types for the saved-object content layer.
//!
//! # Core Concepts
//!
//! - [`SavedObject`]: a stored document with a kind, id, open attribute
//!   document, and outbound [`Reference`]s to other saved objects
//! - [`SavedObjectsClient`]: the async capability surface of a store
//!   (`get`, `bulk_get`, `find`)
//! - [`MemoryStore`]: an in-process client implementation used by tests
//!   and demos
//! - [`ObjectError`]: the error taxonomy every client implements
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_object::{MemoryStore, SavedObject, SavedObjectsClient};
//!
//! let store = MemoryStore::new();
//! store.insert(SavedObject::new("dashboard", "d1"));
//!
//! let object = store.get("dashboard", "d1").await?;
//! println!("{} references", object.references.len());
//! ```

// Core modules
mod client;
mod error;
mod memory;
mod object;

// Re-exports
pub use client::{BulkGetResponse, FindQuery, FindResponse, SavedObjectsClient};
pub use error::ObjectError;
pub use memory::MemoryStore;
pub use object::{ObjectKey, Reference, SavedObject};
