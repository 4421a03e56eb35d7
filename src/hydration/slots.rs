//! Slot configuration: the data that drives a hydration call.
//!
//! Every call site declares its own ordered slot list instead of sharing a
//! merged "canonical" one; see [`models::presets`](crate::models::presets)
//! for the lists the platform's call sites actually use.

/// One named relation slot to resolve under a root entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    /// Key the resolved record array is assigned to on the aggregate.
    pub slot: String,

    /// Subcollection name under the root document.
    pub subcollection: String,

    /// When present, each record's foreign key is resolved and the
    /// referenced document inlined.
    pub reference: Option<ReferenceSpec>,
}

/// Second-level resolution of a foreign key on a slot's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSpec {
    /// Record field holding the referenced document's id.
    pub foreign_key_field: String,

    /// Top-level collection the foreign key points into.
    pub foreign_collection: String,

    /// Key the referenced document's fields are inlined under. Set to
    /// `null` when the reference does not resolve.
    pub inline_as: String,
}

impl SlotConfig {
    /// A slot copied through as-is, each record tagged with its own id.
    pub fn passthrough(slot: impl Into<String>, subcollection: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            subcollection: subcollection.into(),
            reference: None,
        }
    }

    /// A slot whose records carry a foreign key to resolve and inline.
    pub fn with_reference(
        slot: impl Into<String>,
        subcollection: impl Into<String>,
        reference: ReferenceSpec,
    ) -> Self {
        Self {
            slot: slot.into(),
            subcollection: subcollection.into(),
            reference: Some(reference),
        }
    }
}

impl ReferenceSpec {
    pub fn new(
        foreign_key_field: impl Into<String>,
        foreign_collection: impl Into<String>,
        inline_as: impl Into<String>,
    ) -> Self {
        Self {
            foreign_key_field: foreign_key_field.into(),
            foreign_collection: foreign_collection.into(),
            inline_as: inline_as.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_has_no_reference() {
        let slot = SlotConfig::passthrough("programs", "programs");
        assert_eq!(slot.slot, "programs");
        assert!(slot.reference.is_none());
    }

    #[test]
    fn with_reference_carries_the_spec() {
        let slot = SlotConfig::with_reference(
            "members",
            "members",
            ReferenceSpec::new("userId", "users", "user"),
        );
        let spec = slot.reference.unwrap();
        assert_eq!(spec.foreign_key_field, "userId");
        assert_eq!(spec.foreign_collection, "users");
        assert_eq!(spec.inline_as, "user");
    }
}
