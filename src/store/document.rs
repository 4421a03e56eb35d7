//! Document and collection-path types shared by all store implementations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Slash-separated path to a collection, either top-level
/// (`"organizations"`) or nested under a document
/// (`"organizations/org-1/members"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionPath(String);

impl CollectionPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path to a subcollection under one of this collection's documents.
    pub fn subcollection(&self, document_id: &str, name: &str) -> Self {
        Self(format!("{}/{}/{}", self.0, document_id, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollectionPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A stored document: an id plus an untyped JSON field map.
///
/// Typed parsing happens at the model boundary
/// ([`models`](crate::models)), not here; the store layer moves field maps
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field value as a string slice, if present and a JSON string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}
