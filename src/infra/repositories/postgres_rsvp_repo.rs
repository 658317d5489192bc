use crate::domain::{models::rsvp::{RsvpEntry, RsvpPatch}, ports::RsvpRepository};
use crate::error::AppError;
use crate::infra::repositories::lock_id_sequence;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRsvpRepo {
    pool: PgPool,
}

impl PostgresRsvpRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepo {
    async fn create(&self, entry: &RsvpEntry) -> Result<RsvpEntry, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        lock_id_sequence(&mut *tx, "rsvp").await?;

        let created = sqlx::query_as::<_, RsvpEntry>(
            "INSERT INTO rsvp (id, name, status, guests, created_at, attended) VALUES (GREATEST($1, COALESCE((SELECT MAX(id) FROM rsvp), 0) + 1), $2, $3, $4, $5, $6) RETURNING id, name, status, guests, created_at, attended",
        )
            .bind(entry.id)
            .bind(&entry.name)
            .bind(entry.status.as_str())
            .bind(entry.guests)
            .bind(entry.created_at)
            .bind(entry.attended)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<RsvpEntry>, AppError> {
        sqlx::query_as::<_, RsvpEntry>(
            "SELECT id, name, status, guests, created_at, attended FROM rsvp ORDER BY created_at DESC, id DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: i64, patch: &RsvpPatch) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE rsvp SET name = COALESCE($1, name), status = COALESCE($2, status), guests = COALESCE($3, guests), attended = COALESCE($4, attended) WHERE id = $5"
        )
            .bind(&patch.name)
            .bind(patch.status.map(|s| s.as_str()))
            .bind(patch.guests)
            .bind(patch.attended)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM rsvp WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
