use crate::domain::models::{
    invitation::{Invitation, InvitationPatch},
    rsvp::{RsvpEntry, RsvpPatch},
    wish::{Wish, WishPatch},
};
use crate::error::AppError;
use async_trait::async_trait;

// Lists are newest first. Updates and deletes of unknown ids succeed silently.

#[async_trait]
pub trait WishRepository: Send + Sync {
    async fn create(&self, wish: &Wish) -> Result<Wish, AppError>;
    async fn list(&self) -> Result<Vec<Wish>, AppError>;
    async fn update(&self, id: i64, patch: &WishPatch) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn create(&self, entry: &RsvpEntry) -> Result<RsvpEntry, AppError>;
    async fn list(&self) -> Result<Vec<RsvpEntry>, AppError>;
    async fn update(&self, id: i64, patch: &RsvpPatch) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Invitation>, AppError>;
    async fn list(&self) -> Result<Vec<Invitation>, AppError>;
    async fn update(&self, id: i64, patch: &InvitationPatch) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
