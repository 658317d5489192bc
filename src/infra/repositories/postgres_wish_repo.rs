use crate::domain::{models::wish::{Wish, WishPatch}, ports::WishRepository};
use crate::error::AppError;
use crate::infra::repositories::lock_id_sequence;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresWishRepo {
    pool: PgPool,
}

impl PostgresWishRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishRepository for PostgresWishRepo {
    async fn create(&self, wish: &Wish) -> Result<Wish, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        lock_id_sequence(&mut *tx, "wishes").await?;

        let created = sqlx::query_as::<_, Wish>(
            "INSERT INTO wishes (id, name, message, created_at) VALUES (GREATEST($1, COALESCE((SELECT MAX(id) FROM wishes), 0) + 1), $2, $3, $4) RETURNING id, name, message, created_at",
        )
            .bind(wish.id)
            .bind(&wish.name)
            .bind(&wish.message)
            .bind(wish.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
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
        sqlx::query("UPDATE wishes SET name = COALESCE($1, name), message = COALESCE($2, message) WHERE id = $3")
            .bind(&patch.name)
            .bind(&patch.message)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM wishes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
