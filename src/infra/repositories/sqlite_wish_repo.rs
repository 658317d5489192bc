use crate::domain::{models::wish::{Wish, WishPatch}, ports::WishRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteWishRepo {
    pool: SqlitePool,
}

impl SqliteWishRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishRepository for SqliteWishRepo {
    async fn create(&self, wish: &Wish) -> Result<Wish, AppError> {
        sqlx::query_as::<_, Wish>(
            "INSERT INTO wishes (id, name, message, created_at) VALUES (MAX(?, COALESCE((SELECT MAX(id) FROM wishes), 0) + 1), ?, ?, ?) RETURNING id, name, message, created_at",
        )
            .bind(wish.id)
            .bind(&wish.name)
            .bind(&wish.message)
            .bind(wish.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Wish>, AppError> {
        sqlx::query_as::<_, Wish>(
            "SELECT id, name, message, created_at FROM wishes ORDER BY created_at DESC, id DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: i64, patch: &WishPatch) -> Result<(), AppError> {
        sqlx::query("UPDATE wishes SET name = COALESCE(?, name), message = COALESCE(?, message) WHERE id = ?")
            .bind(&patch.name)
            .bind(&patch.message)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM wishes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
