//! Error types for the document-store client layer.

use thiserror::Error;

/// Failures raised by a [`DocumentStore`](super::DocumentStore) implementation.
///
/// Document absence is not an error at this layer; reads encode it as
/// `Ok(None)`. These variants cover the transport and permission class of
/// failures plus documents the backend returns in a shape the store client
/// cannot represent as a field map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached or answered with a transport-level
    /// failure.
    #[error("Document store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend rejected the operation for the current credentials.
    #[error("Permission denied for '{path}'")]
    PermissionDenied { path: String },

    /// The backend returned a document that is not a field map.
    #[error("Malformed document at '{path}': {reason}")]
    InvalidDocument { path: String, reason: String },
}

pub type StoreResult<T> = anyhow::Result<T, StoreError>;
