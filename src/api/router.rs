use axum::{
    body::Body,
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::gate::session_gate;
use crate::api::handlers::{auth, health, invitations, pages, rsvp, wishes};
use tower_http::trace::TraceLayer;
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public invitation
        .route("/", get(pages::landing))
        .route("/api/guest", get(pages::resolve_guest))

        // Admin pages (gated)
        .route("/admin", get(pages::admin_dashboard))
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", post(auth::logout))

        // Data endpoints
        .route("/api/wishes", get(wishes::list_wishes).post(wishes::create_wish).put(wishes::update_wish).delete(wishes::delete_wish))
        .route("/api/rsvp", get(rsvp::list_rsvp).post(rsvp::create_rsvp).put(rsvp::update_rsvp).delete(rsvp::delete_rsvp))
        .route("/api/invitations", get(invitations::list_invitations).post(invitations::create_invitation).put(invitations::update_invitation).delete(invitations::delete_invitation))

        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
