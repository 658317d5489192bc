use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{admin::AdminSession, payload::{ApiJson, ApiQuery}};
use crate::api::dtos::{
    requests::{CreateRsvpRequest, DeleteQuery, UpdateRsvpRequest},
    responses::SuccessResponse,
};
use crate::domain::models::rsvp::RsvpEntry;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_rsvp(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.store.list_rsvp().await?;
    Ok(Json(entries))
}

pub async fn create_rsvp(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, status, guests) = payload.validate()?;
    let created = state.store.add_rsvp(RsvpEntry::new(name, status, guests)).await?;
    info!("RSVP {} recorded: {} ({} guests)", created.id, created.status, created.guests);
    Ok(Json(created))
}

pub async fn update_rsvp(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<UpdateRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (id, patch) = payload.into_patch()?;
    state.store.update_rsvp(id, patch).await?;
    info!("Updated RSVP: {}", id);
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_rsvp(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = query.id()?;
    state.store.delete_rsvp(id).await?;
    info!("Deleted RSVP: {}", id);
    Ok(Json(SuccessResponse::ok()))
}
