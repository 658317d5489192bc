use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use crate::domain::services::session_gate::SESSION_COOKIE;
use crate::error::AppError;
use tower_cookies::Cookies;
use tracing::debug;

/// Admin-only data endpoints apply the same presence check as the page gate.
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(AppError::InternalWithMsg("Cookie layer missing".into()))?;

        if cookies.get(SESSION_COOKIE).is_none() {
            debug!("Rejected admin request without session cookie: {}", parts.uri.path());
            return Err(AppError::Unauthorized);
        }

        Ok(AdminSession)
    }
}
