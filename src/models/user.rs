//! User profiles and the user-side view of organization memberships.

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::hydration::HydratedAggregate;
use crate::models::member::MemberRole;
use crate::models::organization::OrganizationSummary;

/// A user document from the top-level `users` collection, as inlined into
/// member records or hydrated as a root entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// One record of a user's `memberships` subcollection, with the referenced
/// organization inlined when it resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    pub organization_id: String,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default)]
    pub organization: Option<OrganizationSummary>,
}

/// A user root hydrated with
/// [`presets::user_membership_slots`](crate::models::presets::user_membership_slots):
/// the profile plus every organization the user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMembershipsView {
    pub id: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl UserMembershipsView {
    pub fn from_aggregate(aggregate: &HydratedAggregate) -> ModelResult<Self> {
        serde_json::from_value(aggregate.to_value()).map_err(|error| ModelError::Parse {
            entity: "UserMembershipsView",
            id: aggregate.id.clone(),
            reason: error.to_string(),
        })
    }
}
