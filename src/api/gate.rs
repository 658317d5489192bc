use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::debug;

use crate::domain::services::session_gate::{decide, GateDecision, ADMIN_HOME, ADMIN_LOGIN, SESSION_COOKIE};
use crate::state::AppState;

pub async fn session_gate(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let has_session = cookies.get(SESSION_COOKIE).is_some();

    match decide(&path, has_session) {
        GateDecision::Proceed => next.run(request).await,
        GateDecision::RedirectToLogin => {
            debug!("No admin session for {}, redirecting to login", path);
            Redirect::to(&state.config.url(ADMIN_LOGIN)).into_response()
        }
        GateDecision::RedirectToAdmin => Redirect::to(&state.config.url(ADMIN_HOME)).into_response(),
    }
}
