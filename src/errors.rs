//! Error types for the hydration core.
//!
//! The taxonomy mirrors the propagation policy: root-resolution failures
//! are fatal to a hydration call and surface here; reference-resolution
//! failures during enrichment are swallowed at the record level by the
//! hydrator and never appear in these types.

use crate::store::StoreError;
use thiserror::Error;

/// Fatal failures of an aggregate hydration call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HydrationError {
    /// The root document does not exist. No slot processing occurred.
    #[error("Root document '{id}' not found in '{collection}'")]
    RootNotFound { collection: String, id: String },

    /// The store failed while fetching the root document. Propagated
    /// immediately; no partial aggregate is produced.
    #[error("Document store failed during root fetch: {0}")]
    StoreUnavailable(#[source] StoreError),

    /// The caller passed an empty root id.
    #[error("Root id must be a non-empty identifier")]
    InvalidRootId,
}

/// Failures parsing a document or hydrated aggregate into a typed model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Failed to parse {entity} from document '{id}': {reason}")]
    Parse {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

pub type HydrationResult<T> = anyhow::Result<T, HydrationError>;
pub type ModelResult<T> = anyhow::Result<T, ModelError>;
