//! # Document Store Abstraction
//!
//! The only contract surface the hydration core depends on: an async client
//! for a document database organized as named collections of id-addressed
//! JSON documents, with subcollections nested under documents.
//!
//! ## Operations
//!
//! - [`DocumentStore::get_document`] — single document by id; absence is
//!   `Ok(None)`, never an error.
//! - [`DocumentStore::list_documents`] — all documents of a collection in
//!   the store's natural enumeration order, optionally limited (the
//!   hydrator's existence probe passes a limit of one).
//!
//! Real backends implement this trait in their own crates. This crate ships
//! [`InMemoryDocumentStore`] for tests and embedded use.

mod document;
mod error;
mod memory;

pub use document::{CollectionPath, Document};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;

use async_trait::async_trait;

/// Async client for a document database.
///
/// Implementations are shared across concurrent hydration calls and must be
/// stateless with respect to callers; interior caching or pooling is the
/// implementation's business.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id. `Ok(None)` means the document does
    /// not exist.
    async fn get_document(
        &self,
        collection: &CollectionPath,
        id: &str,
    ) -> StoreResult<Option<Document>>;

    /// List the documents of a collection in natural enumeration order.
    ///
    /// A `limit` caps the number of returned documents; `None` returns the
    /// whole collection. An empty or missing collection is `Ok(vec![])`.
    async fn list_documents(
        &self,
        collection: &CollectionPath,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>>;
}
