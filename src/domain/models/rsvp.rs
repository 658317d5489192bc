use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[serde(alias = "hadir")]
    Attending,
    #[serde(alias = "tidak")]
    NotAttending,
}

#[derive(Debug, Error)]
#[error("unknown RSVP status '{0}'")]
pub struct UnknownRsvpStatus(pub String);

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Attending => "attending",
            RsvpStatus::NotAttending => "not_attending",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RsvpStatus {
    type Error = UnknownRsvpStatus;

    // Rows written before the status was canonicalised may still say hadir/tidak.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "attending" | "hadir" => Ok(RsvpStatus::Attending),
            "not_attending" | "tidak" => Ok(RsvpStatus::NotAttending),
            _ => Err(UnknownRsvpStatus(value)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RsvpEntry {
    pub id: i64,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub status: RsvpStatus,
    pub guests: i32,
    pub created_at: DateTime<Utc>,
    pub attended: Option<bool>,
}

impl RsvpEntry {
    pub fn new(name: String, status: RsvpStatus, guests: i32) -> Self {
        let created_at = Utc::now();
        Self {
            id: created_at.timestamp_millis(),
            name,
            status,
            guests,
            created_at,
            attended: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RsvpPatch {
    pub name: Option<String>,
    pub status: Option<RsvpStatus>,
    pub guests: Option<i32>,
    pub attended: Option<bool>,
}

impl RsvpPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.guests.is_none() && self.attended.is_none()
    }
}

/// Totals shown on the dashboard.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSummary {
    pub attending: usize,
    pub not_attending: usize,
    pub total_guests: i64,
}

impl RsvpSummary {
    pub fn from_entries(entries: &[RsvpEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, entry| {
            match entry.status {
                RsvpStatus::Attending => {
                    acc.attending += 1;
                    acc.total_guests += i64::from(entry.guests);
                }
                RsvpStatus::NotAttending => acc.not_attending += 1,
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_legacy_spellings() {
        let legacy: RsvpStatus = serde_json::from_str("\"hadir\"").unwrap();
        assert_eq!(legacy, RsvpStatus::Attending);
        let legacy: RsvpStatus = serde_json::from_str("\"tidak\"").unwrap();
        assert_eq!(legacy, RsvpStatus::NotAttending);

        assert_eq!(serde_json::to_string(&RsvpStatus::NotAttending).unwrap(), "\"not_attending\"");
        assert!(RsvpStatus::try_from("maybe".to_string()).is_err());
    }

    #[test]
    fn test_summary_counts_only_attending_guests() {
        let mut declined = RsvpEntry::new("Rina".into(), RsvpStatus::NotAttending, 2);
        declined.id += 1;
        let entries = vec![
            RsvpEntry::new("Siti".into(), RsvpStatus::Attending, 2),
            RsvpEntry::new("Budi".into(), RsvpStatus::Attending, 1),
            declined,
        ];

        let summary = RsvpSummary::from_entries(&entries);
        assert_eq!(summary, RsvpSummary { attending: 2, not_attending: 1, total_guests: 3 });
    }
}
