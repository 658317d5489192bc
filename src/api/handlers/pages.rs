use axum::{extract::State, response::{Html, IntoResponse}, Json};
use crate::state::AppState;
use crate::api::extractors::payload::ApiQuery;
use crate::api::dtos::requests::GuestQuery;
use crate::domain::models::rsvp::RsvpSummary;
use crate::domain::services::guest_name::resolve_guest_name;
use crate::error::AppError;
use std::sync::Arc;
use tera::Context;

pub(crate) fn render(state: &AppState, template: &str, context: &mut Context) -> Result<Html<String>, AppError> {
    context.insert("base_path", &state.config.base_path);
    state.templates
        .render(template, context)
        .map(Html)
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to render {}: {:?}", template, e)))
}

pub async fn landing(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<GuestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guest = resolve_guest_name(&state.store, query.u.as_deref()).await;
    let wishes = state.store.list_wishes().await?;

    let mut context = Context::new();
    context.insert("guest_name", &guest.guest_name);
    context.insert("wishes", &wishes);
    render(&state, "index.html", &mut context)
}

pub async fn resolve_guest(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<GuestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guest = resolve_guest_name(&state.store, query.u.as_deref()).await;
    Ok(Json(guest))
}

pub async fn admin_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let (wishes, rsvps, invitations) = tokio::join!(
        state.store.list_wishes(),
        state.store.list_rsvp(),
        state.store.list_invitations(),
    );
    let (wishes, rsvps, invitations) = (wishes?, rsvps?, invitations?);

    let mut context = Context::new();
    context.insert("summary", &RsvpSummary::from_entries(&rsvps));
    context.insert("wishes", &wishes);
    context.insert("rsvps", &rsvps);
    context.insert("invitations", &invitations);
    render(&state, "admin.html", &mut context)
}
