//! Organization root entity and its hydrated views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::hydration::HydratedAggregate;
use crate::models::member::Member;
use crate::models::program::Program;

/// An organization document from the top-level `organizations` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Organization fields as inlined into a referencing record (no id; the
/// referencing record keeps the foreign key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// An organization root hydrated with
/// [`presets::organization_detail_slots`](crate::models::presets::organization_detail_slots).
///
/// Parsing with the lighter overview preset also works; slots the preset
/// does not resolve default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationView {
    #[serde(flatten)]
    pub organization: Organization,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub programs: Vec<Program>,
}

impl OrganizationView {
    pub fn from_aggregate(aggregate: &HydratedAggregate) -> ModelResult<Self> {
        serde_json::from_value(aggregate.to_value()).map_err(|error| ModelError::Parse {
            entity: "OrganizationView",
            id: aggregate.id.clone(),
            reason: error.to_string(),
        })
    }
}
