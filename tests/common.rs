#![allow(dead_code)]

use wedding_invitation::{
    api::router::create_router,
    state::AppState,
    config::{Config, ReadFailurePolicy},
    infra::factory::{load_templates, run_sqlite_migrations, store_policy},
    infra::repositories::{
        sqlite_invitation_repo::SqliteInvitationRepo,
        sqlite_rsvp_repo::SqliteRsvpRepo,
        sqlite_wish_repo::SqliteWishRepo,
    },
    domain::models::{
        invitation::{Invitation, InvitationPatch},
        rsvp::{RsvpEntry, RsvpPatch},
        wish::{Wish, WishPatch},
    },
    domain::ports::{InvitationRepository, RsvpRepository, WishRepository},
    domain::services::record_store::RecordStore,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, Response, header},
    Router,
};
use std::str::FromStr;
use async_trait::async_trait;
use tower::ServiceExt;
use serde_json::Value;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

pub const ADMIN_PASSWORD: &str = "rahasia-pengantin";

pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response.headers()
        .get(header::LOCATION)
        .expect("No Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn test_config(database_url: &str, base_path: &str) -> Config {
    let salt = SaltString::generate(&mut OsRng);
    let admin_password_hash = Argon2::default()
        .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string();

    Config {
        database_url: database_url.to_string(),
        port: 0,
        admin_password_hash,
        base_path: base_path.to_string(),
        store_timeout: Duration::from_secs(10),
        read_failure_policy: ReadFailurePolicy::Open,
    }
}

/// Router over an arbitrary store, for exercising failure paths.
pub fn router_for_store(store: RecordStore) -> Router {
    let state = Arc::new(AppState {
        config: test_config("sqlite::memory:", ""),
        store: Arc::new(store),
        templates: Arc::new(load_templates()),
    });
    create_router(state)
}

/// Every call sleeps for `delay` and then succeeds with nothing.
pub struct SlowRepo {
    pub delay: Duration,
}

impl SlowRepo {
    async fn stall(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl WishRepository for SlowRepo {
    async fn create(&self, wish: &Wish) -> Result<Wish, AppError> {
        self.stall().await;
        Ok(wish.clone())
    }
    async fn list(&self) -> Result<Vec<Wish>, AppError> {
        self.stall().await;
        Ok(Vec::new())
    }
    async fn update(&self, _id: i64, _patch: &WishPatch) -> Result<(), AppError> {
        self.stall().await;
        Ok(())
    }
    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        self.stall().await;
        Ok(())
    }
}

#[async_trait]
impl RsvpRepository for SlowRepo {
    async fn create(&self, entry: &RsvpEntry) -> Result<RsvpEntry, AppError> {
        self.stall().await;
        Ok(entry.clone())
    }
    async fn list(&self) -> Result<Vec<RsvpEntry>, AppError> {
        self.stall().await;
        Ok(Vec::new())
    }
    async fn update(&self, _id: i64, _patch: &RsvpPatch) -> Result<(), AppError> {
        self.stall().await;
        Ok(())
    }
    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        self.stall().await;
        Ok(())
    }
}

#[async_trait]
impl InvitationRepository for SlowRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        self.stall().await;
        Ok(invitation.clone())
    }
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Invitation>, AppError> {
        self.stall().await;
        Ok(None)
    }
    async fn list(&self) -> Result<Vec<Invitation>, AppError> {
        self.stall().await;
        Ok(Vec::new())
    }
    async fn update(&self, _id: i64, _patch: &InvitationPatch) -> Result<(), AppError> {
        self.stall().await;
        Ok(())
    }
    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        self.stall().await;
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_base_path("").await
    }

    pub async fn with_base_path(base_path: &str) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = test_config(&db_url, base_path);

        let store = RecordStore::new(
            Arc::new(SqliteWishRepo::new(pool.clone())),
            Arc::new(SqliteRsvpRepo::new(pool.clone())),
            Arc::new(SqliteInvitationRepo::new(pool.clone())),
            store_policy(&config),
        );

        let state = Arc::new(AppState {
            config,
            store: Arc::new(store),
            templates: Arc::new(load_templates()),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Logs in through the form and returns the `admin_token=...` cookie pair.
    pub async fn login(&self) -> String {
        let response = self.send(
            Request::builder()
                .method("POST")
                .uri("/admin/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("password={}", ADMIN_PASSWORD)))
                .unwrap()
        ).await;

        if !response.status().is_redirection() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let set_cookie = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .find(|c| c.starts_with("admin_token="))
            .expect("No admin_token cookie returned");

        set_cookie.split(';').next().unwrap().to_string()
    }

    pub async fn json(&self, method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
