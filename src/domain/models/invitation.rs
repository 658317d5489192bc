use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: i64,
    pub slug: String,
    pub guest_name: String,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(slug: String, guest_name: String) -> Self {
        let created_at = Utc::now();
        Self {
            id: created_at.timestamp_millis(),
            slug,
            guest_name,
            created_at,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvitationPatch {
    pub slug: Option<String>,
    pub guest_name: Option<String>,
}

impl InvitationPatch {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none() && self.guest_name.is_none()
    }
}
