use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tracing::{debug, error, warn};

use crate::config::ReadFailurePolicy;
use crate::domain::{
    models::{
        invitation::{Invitation, InvitationPatch},
        rsvp::{RsvpEntry, RsvpPatch},
        wish::{Wish, WishPatch},
    },
    ports::{InvitationRepository, RsvpRepository, WishRepository},
    services::relative_time::time_ago,
};
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub struct StorePolicy {
    pub timeout: Duration,
    pub read_failure: ReadFailurePolicy,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            read_failure: ReadFailurePolicy::Open,
        }
    }
}

/// Facade over the three collections. Every call is bounded by the policy
/// timeout; list reads follow the configured read-failure policy, writes
/// always propagate.
pub struct RecordStore {
    wishes: Arc<dyn WishRepository>,
    rsvp: Arc<dyn RsvpRepository>,
    invitations: Arc<dyn InvitationRepository>,
    policy: StorePolicy,
}

impl RecordStore {
    pub fn new(
        wishes: Arc<dyn WishRepository>,
        rsvp: Arc<dyn RsvpRepository>,
        invitations: Arc<dyn InvitationRepository>,
        policy: StorePolicy,
    ) -> Self {
        Self { wishes, rsvp, invitations, policy }
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.policy.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation = op, timeout_ms = self.policy.timeout.as_millis() as u64, "Store operation timed out");
                Err(AppError::Timeout(op.to_string()))
            }
        }
    }

    async fn read_all<T, F>(&self, collection: &'static str, fut: F) -> Result<Vec<T>, AppError>
    where
        F: Future<Output = Result<Vec<T>, AppError>>,
    {
        match self.bounded(collection, fut).await {
            Ok(items) => {
                if items.is_empty() {
                    debug!(collection, "Collection confirmed empty");
                }
                Ok(items)
            }
            Err(e) => match self.policy.read_failure {
                ReadFailurePolicy::Open => {
                    error!(collection, error = %e, "Fetch failed, serving empty collection");
                    Ok(Vec::new())
                }
                ReadFailurePolicy::Closed => Err(e),
            },
        }
    }

    // Wishes

    pub async fn list_wishes(&self) -> Result<Vec<Wish>, AppError> {
        let mut wishes = self.read_all("wishes", self.wishes.list()).await?;
        let now = Utc::now();
        for wish in &mut wishes {
            wish.time_ago = Some(time_ago(wish.created_at, now));
        }
        Ok(wishes)
    }

    pub async fn add_wish(&self, name: String, message: String) -> Result<Wish, AppError> {
        let wish = Wish::new(name, message);
        let mut created = self.bounded("add wish", self.wishes.create(&wish)).await?;
        created.time_ago = Some(time_ago(created.created_at, Utc::now()));
        Ok(created)
    }

    pub async fn update_wish(&self, id: i64, patch: WishPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.bounded("update wish", self.wishes.update(id, &patch)).await
    }

    pub async fn delete_wish(&self, id: i64) -> Result<(), AppError> {
        self.bounded("delete wish", self.wishes.delete(id)).await
    }

    // RSVP

    pub async fn list_rsvp(&self) -> Result<Vec<RsvpEntry>, AppError> {
        self.read_all("rsvp", self.rsvp.list()).await
    }

    pub async fn add_rsvp(&self, entry: RsvpEntry) -> Result<RsvpEntry, AppError> {
        self.bounded("add rsvp", self.rsvp.create(&entry)).await
    }

    pub async fn update_rsvp(&self, id: i64, patch: RsvpPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.bounded("update rsvp", self.rsvp.update(id, &patch)).await
    }

    pub async fn delete_rsvp(&self, id: i64) -> Result<(), AppError> {
        self.bounded("delete rsvp", self.rsvp.delete(id)).await
    }

    // Invitations

    pub async fn list_invitations(&self) -> Result<Vec<Invitation>, AppError> {
        self.read_all("invitations", self.invitations.list()).await
    }

    pub async fn add_invitation(&self, slug: String, guest_name: String) -> Result<Invitation, AppError> {
        let invitation = Invitation::new(slug, guest_name);
        self.bounded("add invitation", self.invitations.create(&invitation)).await
    }

    pub async fn update_invitation(&self, id: i64, patch: InvitationPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.bounded("update invitation", self.invitations.update(id, &patch)).await
    }

    pub async fn delete_invitation(&self, id: i64) -> Result<(), AppError> {
        self.bounded("delete invitation", self.invitations.delete(id)).await
    }

    pub async fn find_invitation_by_slug(&self, slug: &str) -> Result<Option<Invitation>, AppError> {
        self.bounded("find invitation by slug", self.invitations.find_by_slug(slug)).await
    }
}
