//! Organization member records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::user::UserProfile;

/// One record of an organization's `members` subcollection. `user` carries
/// the inlined profile when the `userId` reference resolved; an
/// unresolved reference leaves it `None` but keeps the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Member role as stored on the record.
///
/// Roles this crate does not know about map to [`MemberRole::Unknown`]
/// instead of failing the parse; the store is shared with newer clients
/// that may introduce roles first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberRole {
    Owner,
    Admin,
    #[default]
    Member,
    Viewer,
    Unknown,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Admin => "admin",
            MemberRole::Member => "member",
            MemberRole::Viewer => "viewer",
            MemberRole::Unknown => "unknown",
        }
    }

    fn from_str_lossy(value: &str) -> Self {
        match value {
            "owner" => MemberRole::Owner,
            "admin" => MemberRole::Admin,
            "member" => MemberRole::Member,
            "viewer" => MemberRole::Viewer,
            _ => MemberRole::Unknown,
        }
    }
}

impl Serialize for MemberRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MemberRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&value))
    }
}
