use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::state::AppState;
use crate::api::dtos::requests::LoginForm;
use crate::api::handlers::pages::render;
use crate::domain::services::session_gate::{ADMIN_HOME, ADMIN_LOGIN, SESSION_COOKIE};
use crate::error::AppError;
use std::sync::Arc;
use tera::Context;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use time::Duration;
use argon2::{PasswordHash, Argon2, PasswordVerifier};
use rand::{distributions::Alphanumeric, Rng};
use tracing::{info, warn};

const WRONG_PASSWORD: &str = "Kata sandi salah.";

pub async fn login_page(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut context = Context::new();
    context.insert("error", &Option::<&str>::None);
    render(&state, "login.html", &mut context)
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let parsed_hash = PasswordHash::new(&state.config.admin_password_hash)
        .map_err(|e| AppError::InternalWithMsg(format!("Invalid admin password hash: {}", e)))?;

    if Argon2::default().verify_password(form.password.as_bytes(), &parsed_hash).is_err() {
        warn!("Rejected admin login attempt");
        let mut context = Context::new();
        context.insert("error", WRONG_PASSWORD);
        let page = render(&state, "login.html", &mut context)?;
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    }

    set_session_cookie(&cookies);
    info!("Admin logged in");

    Ok(Redirect::to(&state.config.url(ADMIN_HOME)).into_response())
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> impl IntoResponse {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());
    info!("Admin logged out");
    Redirect::to(&state.config.url(ADMIN_LOGIN))
}

fn set_session_cookie(cookies: &Cookies) {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    let mut session = Cookie::new(SESSION_COOKIE, token);
    session.set_http_only(true);
    session.set_same_site(SameSite::Strict);
    session.set_path("/");
    session.set_max_age(Duration::days(7));
    cookies.add(session);
}
