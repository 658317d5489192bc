use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{admin::AdminSession, payload::{ApiJson, ApiQuery}};
use crate::api::dtos::{
    requests::{present, CreateInvitationRequest, DeleteQuery, UpdateInvitationRequest},
    responses::SuccessResponse,
};
use crate::domain::services::guest_name::derive_slug;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let invitations = state.store.list_invitations().await?;
    Ok(Json(invitations))
}

pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let guest_name = present(payload.guest_name)
        .ok_or_else(|| AppError::Validation("Guest name required".into()))?;

    let slug = present(payload.slug).unwrap_or_else(|| derive_slug(&guest_name));
    if slug.is_empty() {
        return Err(AppError::Validation("Guest name and slug required".into()));
    }

    let created = state.store.add_invitation(slug, guest_name).await?;
    info!("Created invitation '{}' for {}", created.slug, created.guest_name);
    Ok(Json(created))
}

pub async fn update_invitation(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<UpdateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (id, patch) = payload.into_patch()?;
    state.store.update_invitation(id, patch).await?;
    info!("Updated invitation: {}", id);
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = query.id()?;
    state.store.delete_invitation(id).await?;
    info!("Deleted invitation: {}", id);
    Ok(Json(SuccessResponse::ok()))
}
