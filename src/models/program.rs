//! Organization program records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of an organization's `programs` subcollection. Programs
/// carry no foreign key; they are copied through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub budget: Option<f64>,
}
