use crate::domain::{models::invitation::{Invitation, InvitationPatch}, ports::InvitationRepository};
use crate::error::AppError;
use crate::infra::repositories::lock_id_sequence;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresInvitationRepo {
    pool: PgPool,
}

impl PostgresInvitationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        lock_id_sequence(&mut *tx, "invitations").await?;

        let created = sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (id, slug, guest_name, created_at) VALUES (GREATEST($1, COALESCE((SELECT MAX(id) FROM invitations), 0) + 1), $2, $3, $4) RETURNING id, slug, guest_name, created_at",
        )
            .bind(invitation.id)
            .bind(&invitation.slug)
            .bind(&invitation.guest_name)
            .bind(invitation.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT id, slug, guest_name, created_at FROM invitations WHERE slug = $1 ORDER BY created_at ASC, id ASC LIMIT 1",
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
        sqlx::query("UPDATE invitations SET slug = COALESCE($1, slug), guest_name = COALESCE($2, guest_name) WHERE id = $3")
            .bind(&patch.slug)
            .bind(&patch.guest_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM invitations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
