//! In-memory document store.
//!
//! A complete [`DocumentStore`] implementation backed by process memory,
//! used as the test double throughout the crate and suitable for embedded
//! or demo deployments. Enumeration order is deterministic (sorted by
//! document id), reads are counted per collection path so tests can assert
//! which collections an operation touched, and individual paths can be
//! made to fail to exercise transport-failure handling.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::{CollectionPath, Document, DocumentStore, StoreError, StoreResult};
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Map<String, Value>>>>,
    read_counts: RwLock<HashMap<String, u64>>,
    failing_paths: RwLock<HashSet<String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(
        &self,
        collection: &CollectionPath,
        id: impl Into<String>,
        fields: Map<String, Value>,
    ) {
        let mut collections = self.collections.write();
        collections
            .entry(collection.as_str().to_string())
            .or_default()
            .insert(id.into(), fields);
    }

    /// Insert a document from a JSON value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a JSON object.
    pub fn insert_json(&self, collection: &CollectionPath, id: impl Into<String>, value: Value) {
        match value {
            Value::Object(fields) => self.insert(collection, id, fields),
            other => panic!("document fields must be a JSON object, got {other}"),
        }
    }

    /// Remove a document. Returns whether it existed.
    pub fn remove(&self, collection: &CollectionPath, id: &str) -> bool {
        let mut collections = self.collections.write();
        collections
            .get_mut(collection.as_str())
            .map(|docs| docs.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Make every subsequent operation on `collection` fail with
    /// [`StoreError::Unavailable`].
    pub fn fail_path(&self, collection: &CollectionPath) {
        self.failing_paths
            .write()
            .insert(collection.as_str().to_string());
    }

    /// Clear all injected failures.
    pub fn clear_failures(&self) {
        self.failing_paths.write().clear();
    }

    /// Number of read operations (gets and lists) issued against
    /// `collection` since construction.
    pub fn reads_for(&self, collection: &CollectionPath) -> u64 {
        self.read_counts
            .read()
            .get(collection.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Total read operations across all collections.
    pub fn total_reads(&self) -> u64 {
        self.read_counts.read().values().sum()
    }

    fn record_read(&self, collection: &CollectionPath) {
        *self
            .read_counts
            .write()
            .entry(collection.as_str().to_string())
            .or_insert(0) += 1;
    }

    fn check_path(&self, collection: &CollectionPath) -> StoreResult<()> {
        if self.failing_paths.read().contains(collection.as_str()) {
            return Err(StoreError::Unavailable {
                reason: format!("injected failure for '{collection}'"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &CollectionPath,
        id: &str,
    ) -> StoreResult<Option<Document>> {
        self.record_read(collection);
        self.check_path(collection)?;

        let collections = self.collections.read();
        Ok(collections
            .get(collection.as_str())
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn list_documents(
        &self,
        collection: &CollectionPath,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>> {
        self.record_read(collection);
        self.check_path(collection)?;

        let collections = self.collections.read();
        let docs = collections
            .get(collection.as_str())
            .map(|docs| {
                docs.iter()
                    .take(limit.unwrap_or(usize::MAX))
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }
}
