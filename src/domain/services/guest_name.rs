use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::services::record_store::RecordStore;

pub const DEFAULT_HONORIFIC: &str = "Bapak/Ibu/Saudara/i";

/// Lower-cases the name and collapses every run of characters outside
/// `[a-z0-9]` into one hyphen, with no hyphen at either end.
pub fn derive_slug(guest_name: &str) -> String {
    let mut slug = String::with_capacity(guest_name.len());
    let mut pending_separator = false;

    for c in guest_name.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    Invitation,
    Literal,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGuest {
    pub guest_name: String,
    pub source: NameSource,
}

/// Registered slugs win over literal names. A failed or timed-out lookup
/// falls back to the literal token just like a miss, but is logged louder.
pub async fn resolve_guest_name(store: &RecordStore, token: Option<&str>) -> ResolvedGuest {
    let token = match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => t,
        None => {
            return ResolvedGuest {
                guest_name: DEFAULT_HONORIFIC.to_string(),
                source: NameSource::Default,
            }
        }
    };

    match store.find_invitation_by_slug(token).await {
        Ok(Some(invitation)) => {
            return ResolvedGuest {
                guest_name: invitation.guest_name,
                source: NameSource::Invitation,
            };
        }
        Ok(None) => debug!(token, "No invitation for token, using it as the guest name"),
        Err(e) => warn!(token, error = %e, "Invitation lookup failed, using token as the guest name"),
    }

    ResolvedGuest {
        guest_name: token.to_string(),
        source: NameSource::Literal,
    }
}
