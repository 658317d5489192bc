use crate::domain::{models::invitation::{Invitation, InvitationPatch}, ports::InvitationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInvitationRepo {
    pool: SqlitePool,
}

impl SqliteInvitationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for SqliteInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (id, slug, guest_name, created_at) VALUES (MAX(?, COALESCE((SELECT MAX(id) FROM invitations), 0) + 1), ?, ?, ?) RETURNING id, slug, guest_name, created_at",
        )
            .bind(invitation.id)
            .bind(&invitation.slug)
            .bind(&invitation.guest_name)
            .bind(invitation.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT id, slug, guest_name, created_at FROM invitations WHERE slug = ? ORDER BY created_at ASC, id ASC LIMIT 1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT id, slug, guest_name, created_at FROM invitations ORDER BY created_at DESC, id DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: i64, patch: &InvitationPatch) -> Result<(), AppError> {
        sqlx::query("UPDATE invitations SET slug = COALESCE(?, slug), guest_name = COALESCE(?, guest_name) WHERE id = ?")
            .bind(&patch.slug)
            .bind(&patch.guest_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM invitations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
