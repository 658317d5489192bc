use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::record_store::{RecordStore, StorePolicy};
use crate::infra::repositories::{
    postgres_invitation_repo::PostgresInvitationRepo, postgres_rsvp_repo::PostgresRsvpRepo,
    postgres_wish_repo::PostgresWishRepo,
    sqlite_invitation_repo::SqliteInvitationRepo, sqlite_rsvp_repo::SqliteRsvpRepo,
    sqlite_wish_repo::SqliteWishRepo,
};

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("index.html", include_str!("../../templates/index.html")),
        ("admin.html", include_str!("../../templates/admin.html")),
        ("login.html", include_str!("../../templates/login.html")),
    ])
        .expect("Failed to load page templates");
    tera
}

pub fn store_policy(config: &Config) -> StorePolicy {
    StorePolicy {
        timeout: config.store_timeout,
        read_failure: config.read_failure_policy,
    }
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let templates = Arc::new(load_templates());
    let policy = store_policy(config);

    let store = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(config.store_timeout)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        RecordStore::new(
            Arc::new(PostgresWishRepo::new(pool.clone())),
            Arc::new(PostgresRsvpRepo::new(pool.clone())),
            Arc::new(PostgresInvitationRepo::new(pool)),
            policy,
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(config.store_timeout)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        RecordStore::new(
            Arc::new(SqliteWishRepo::new(pool.clone())),
            Arc::new(SqliteRsvpRepo::new(pool.clone())),
            Arc::new(SqliteInvitationRepo::new(pool)),
            policy,
        )
    };

    AppState {
        config: config.clone(),
        store: Arc::new(store),
        templates,
    }
}

pub async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
