//! # Aggregate Hydrator
//!
//! The one canonical implementation of aggregate hydration: fetch a root
//! document, resolve its configured relation slots, inline referenced
//! documents, and return a single [`HydratedAggregate`] snapshot.
//!
//! ## Algorithm
//!
//! 1. Fetch the root document. Absence fails the call with
//!    [`HydrationError::RootNotFound`]; a store failure surfaces as
//!    [`HydrationError::StoreUnavailable`]. No slot is read in either case.
//! 2. Resolve every slot concurrently. Per slot: an optional limit-one
//!    existence probe short-circuits empty subcollections to `[]`;
//!    otherwise the full subcollection is listed and each document becomes
//!    a record of its fields plus its own id under `id`.
//! 3. Slots with a [`ReferenceSpec`] resolve each record's foreign key
//!    concurrently (bounded by `max_concurrent_lookups`) and inline the
//!    referenced document's fields, or `null` when the reference does not
//!    resolve. A record is never dropped for an unresolved reference.
//! 4. Record arrays are assigned to the aggregate in declared slot order,
//!    each preserving its subcollection's natural enumeration order.
//!
//! Failures below the root fetch degrade instead of aborting: a slot whose
//! subcollection cannot be read resolves to `[]`, a record whose reference
//! lookup fails inlines `null`. Partial data beats no data for a read-only
//! aggregate view.
//!
//! ## Cancellation
//!
//! Dropping (or aborting the task driving) the future returned by
//! [`AggregateHydrator::hydrate`] cancels the hydration; in-flight store
//! reads are discarded and no partial aggregate is observable.

use futures::future::join_all;
use futures::stream::{self, StreamExt};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{HydratedAggregate, ReferenceSpec, SlotConfig};
use crate::config::HydrationConfig;
use crate::errors::{HydrationError, HydrationResult};
use crate::store::{CollectionPath, Document, DocumentStore};

/// Produces [`HydratedAggregate`] snapshots from a shared document store.
///
/// The hydrator is cheap to clone and safe to share: it holds only the
/// store handle and its configuration, and every call is an independent
/// pure read.
pub struct AggregateHydrator<S> {
    store: Arc<S>,
    config: HydrationConfig,
}

impl<S> Clone for AggregateHydrator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S> std::fmt::Debug for AggregateHydrator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateHydrator")
            .field("store", &"Arc<S>")
            .field("config", &self.config)
            .finish()
    }
}

impl<S: DocumentStore> AggregateHydrator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, HydrationConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: HydrationConfig) -> Self {
        Self { store, config }
    }

    /// Hydrate the aggregate rooted at `root_collection/root_id`.
    ///
    /// `slots` is the caller's ordered slot list; every configured slot key
    /// is present on the result, `[]` when its subcollection is empty.
    pub async fn hydrate(
        &self,
        root_collection: &str,
        root_id: &str,
        slots: &[SlotConfig],
    ) -> HydrationResult<HydratedAggregate> {
        if root_id.trim().is_empty() {
            return Err(HydrationError::InvalidRootId);
        }

        let snapshot_id = Uuid::new_v4();
        let root_path = CollectionPath::new(root_collection);
        debug!(
            %snapshot_id,
            collection = root_collection,
            root_id,
            slots = slots.len(),
            "Starting aggregate hydration"
        );

        let root = self
            .store
            .get_document(&root_path, root_id)
            .await
            .map_err(HydrationError::StoreUnavailable)?;
        let Some(root_doc) = root else {
            debug!(%snapshot_id, collection = root_collection, root_id, "Root document not found");
            return Err(HydrationError::RootNotFound {
                collection: root_collection.to_string(),
                id: root_id.to_string(),
            });
        };

        let resolved = join_all(
            slots
                .iter()
                .map(|slot| self.resolve_slot(&root_path, root_id, slot, snapshot_id)),
        )
        .await;

        let mut fields = root_doc.fields;
        for (slot, records) in slots.iter().zip(resolved) {
            debug!(%snapshot_id, slot = %slot.slot, records = records.len(), "Slot resolved");
            fields.insert(slot.slot.clone(), Value::Array(records));
        }

        debug!(%snapshot_id, root_id, "Aggregate hydration complete");
        Ok(HydratedAggregate {
            id: root_doc.id,
            fields,
        })
    }

    /// Resolve one slot to its record array. Read failures below the root
    /// degrade to an empty slot rather than failing the hydration.
    async fn resolve_slot(
        &self,
        root_path: &CollectionPath,
        root_id: &str,
        slot: &SlotConfig,
        snapshot_id: Uuid,
    ) -> Vec<Value> {
        let path = root_path.subcollection(root_id, &slot.subcollection);

        if self.config.existence_probe {
            match self.store.list_documents(&path, Some(1)).await {
                Ok(probe) if probe.is_empty() => {
                    debug!(%snapshot_id, slot = %slot.slot, "Subcollection empty, skipping fetch");
                    return Vec::new();
                }
                Ok(_) => {}
                Err(error) => {
                    warn!(%snapshot_id, slot = %slot.slot, %error, "Existence probe failed, leaving slot empty");
                    return Vec::new();
                }
            }
        }

        let docs = match self.store.list_documents(&path, self.config.list_limit).await {
            Ok(docs) => docs,
            Err(error) => {
                warn!(%snapshot_id, slot = %slot.slot, %error, "Slot fetch failed, leaving slot empty");
                return Vec::new();
            }
        };

        match &slot.reference {
            None => docs
                .into_iter()
                .map(|doc| Value::Object(record_from(doc)))
                .collect(),
            Some(spec) => {
                stream::iter(
                    docs.into_iter()
                        .map(|doc| self.resolve_record(doc, spec, snapshot_id)),
                )
                // `buffered` keeps enumeration order while lookups overlap.
                .buffered(self.config.max_concurrent_lookups.max(1))
                .collect()
                .await
            }
        }
    }

    /// Build one record and inline its referenced document, `null` when
    /// the reference does not resolve.
    async fn resolve_record(
        &self,
        doc: Document,
        spec: &ReferenceSpec,
        snapshot_id: Uuid,
    ) -> Value {
        let foreign_id = doc.str_field(&spec.foreign_key_field).map(str::to_owned);
        let record_id = doc.id.clone();
        let mut record = record_from(doc);

        let inlined = match foreign_id {
            Some(foreign_id) => {
                self.fetch_reference(&spec.foreign_collection, &foreign_id, snapshot_id)
                    .await
            }
            None => {
                debug!(
                    %snapshot_id,
                    record_id,
                    field = %spec.foreign_key_field,
                    "Record has no usable foreign key"
                );
                Value::Null
            }
        };
        record.insert(spec.inline_as.clone(), inlined);
        Value::Object(record)
    }

    async fn fetch_reference(
        &self,
        foreign_collection: &str,
        foreign_id: &str,
        snapshot_id: Uuid,
    ) -> Value {
        let path = CollectionPath::new(foreign_collection);
        match self.store.get_document(&path, foreign_id).await {
            Ok(Some(doc)) => Value::Object(doc.fields),
            Ok(None) => {
                debug!(%snapshot_id, collection = foreign_collection, foreign_id, "Referenced document absent");
                Value::Null
            }
            Err(error) => {
                debug!(%snapshot_id, collection = foreign_collection, foreign_id, %error, "Reference lookup failed");
                Value::Null
            }
        }
    }
}

/// A document as a slot record: its fields plus its own id under `id`.
fn record_from(doc: Document) -> Map<String, Value> {
    let mut record = doc.fields;
    record.insert("id".to_string(), Value::String(doc.id));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_from_tags_the_document_id() {
        let mut fields = Map::new();
        fields.insert("userId".to_string(), json!("u1"));
        let record = record_from(Document::new("m1", fields));
        assert_eq!(record.get("id"), Some(&json!("m1")));
        assert_eq!(record.get("userId"), Some(&json!("u1")));
    }

    #[test]
    fn record_from_lets_the_document_id_win() {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!("stale"));
        let record = record_from(Document::new("m1", fields));
        assert_eq!(record.get("id"), Some(&json!("m1")));
    }
}
