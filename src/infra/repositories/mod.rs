pub mod sqlite_invitation_repo;
pub mod sqlite_rsvp_repo;
pub mod sqlite_wish_repo;

pub mod postgres_invitation_repo;
pub mod postgres_rsvp_repo;
pub mod postgres_wish_repo;

/// Serializes id assignment on `table` until the surrounding transaction ends,
/// so concurrent inserts never read the same `MAX(id)`.
pub(crate) async fn lock_id_sequence(conn: &mut sqlx::PgConnection, table: &str) -> Result<(), crate::error::AppError> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(table)
        .execute(conn)
        .await
        .map_err(crate::error::AppError::Database)?;
    Ok(())
}
