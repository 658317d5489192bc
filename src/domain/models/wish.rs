use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const MAX_MESSAGE_CHARS: usize = 300;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: i64,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Filled in at read time, never stored.
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ago: Option<String>,
}

impl Wish {
    pub fn new(name: String, message: String) -> Self {
        let created_at = Utc::now();
        Self {
            id: created_at.timestamp_millis(),
            name,
            message,
            created_at,
            time_ago: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WishPatch {
    pub name: Option<String>,
    pub message: Option<String>,
}

impl WishPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.message.is_none()
    }
}
