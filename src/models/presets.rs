//! Slot-config presets for the platform's hydration call sites.
//!
//! Slot configuration is data: each call site declares exactly the slots
//! it needs, and these are the three lists in actual use. Nothing stops a
//! caller from declaring its own list with other subcollections.

use crate::hydration::{ReferenceSpec, SlotConfig};

pub const ORGANIZATIONS_COLLECTION: &str = "organizations";
pub const USERS_COLLECTION: &str = "users";

/// Full organization page: members with their user profiles inlined,
/// plus programs.
pub fn organization_detail_slots() -> Vec<SlotConfig> {
    vec![
        SlotConfig::with_reference(
            "members",
            "members",
            ReferenceSpec::new("userId", USERS_COLLECTION, "user"),
        ),
        SlotConfig::passthrough("programs", "programs"),
    ]
}

/// Lighter organization card: members only.
pub fn organization_overview_slots() -> Vec<SlotConfig> {
    vec![SlotConfig::with_reference(
        "members",
        "members",
        ReferenceSpec::new("userId", USERS_COLLECTION, "user"),
    )]
}

/// The user-side direction: a user root's `memberships` subcollection
/// with each referenced organization inlined.
pub fn user_membership_slots() -> Vec<SlotConfig> {
    vec![SlotConfig::with_reference(
        "memberships",
        "memberships",
        ReferenceSpec::new("organizationId", ORGANIZATIONS_COLLECTION, "organization"),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_slots_resolve_members_and_programs() {
        let slots = organization_detail_slots();
        assert_eq!(slots.len(), 2);
        assert!(slots[0].reference.is_some());
        assert!(slots[1].reference.is_none());
    }

    #[test]
    fn overview_is_a_strict_subset_of_detail() {
        let detail = organization_detail_slots();
        let overview = organization_overview_slots();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0], detail[0]);
    }
}
