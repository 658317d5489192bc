use crate::domain::{models::rsvp::{RsvpEntry, RsvpPatch}, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRsvpRepo {
    pool: SqlitePool,
}

impl SqliteRsvpRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepo {
    async fn create(&self, entry: &RsvpEntry) -> Result<RsvpEntry, AppError> {
        sqlx::query_as::<_, RsvpEntry>(
            "INSERT INTO rsvp (id, name, status, guests, created_at, attended) VALUES (MAX(?, COALESCE((SELECT MAX(id) FROM rsvp), 0) + 1), ?, ?, ?, ?, ?) RETURNING id, name, status, guests, created_at, attended",
        )
            .bind(entry.id)
            .bind(&entry.name)
            .bind(entry.status.as_str())
            .bind(entry.guests)
            .bind(entry.created_at)
            .bind(entry.attended)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
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
            "UPDATE rsvp SET name = COALESCE(?, name), status = COALESCE(?, status), guests = COALESCE(?, guests), attended = COALESCE(?, attended) WHERE id = ?"
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
        sqlx::query("DELETE FROM rsvp WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
