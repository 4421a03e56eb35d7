//! The hydrated read-model snapshot.

use serde::Serialize;
use serde_json::{Map, Value};

/// A root entity's field map extended with every configured relation slot.
///
/// Snapshots are constructed fresh on every hydration, never mutated after
/// return, and never persisted as-is. Every configured slot key is present
/// even when its subcollection is empty. Callers wanting a newer view
/// re-run the hydration; there is no push-based invalidation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydratedAggregate {
    /// The root document's id.
    pub id: String,

    /// Root scalars plus one array per configured slot.
    pub fields: Map<String, Value>,
}

impl HydratedAggregate {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The resolved records of a slot, if `slot` names a configured slot.
    pub fn records(&self, slot: &str) -> Option<&Vec<Value>> {
        match self.fields.get(slot) {
            Some(Value::Array(records)) => Some(records),
            _ => None,
        }
    }

    /// The whole snapshot as one JSON object, with the root id included
    /// under `id`. This is the shape the typed views in
    /// [`models`](crate::models) parse.
    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        Value::Object(fields)
    }
}
