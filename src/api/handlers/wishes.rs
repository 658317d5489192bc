use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{admin::AdminSession, payload::{ApiJson, ApiQuery}};
use crate::api::dtos::{
    requests::{CreateWishRequest, DeleteQuery, UpdateWishRequest},
    responses::SuccessResponse,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_wishes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let wishes = state.store.list_wishes().await?;
    Ok(Json(wishes))
}

pub async fn create_wish(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateWishRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, message) = payload.validate()?;
    let created = state.store.add_wish(name, message).await?;
    info!("Wish {} received from {}", created.id, created.name);
    Ok(Json(created))
}

pub async fn update_wish(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<UpdateWishRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (id, patch) = payload.into_patch()?;
    state.store.update_wish(id, patch).await?;
    info!("Updated wish: {}", id);
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_wish(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = query.id()?;
    state.store.delete_wish(id).await?;
    info!("Deleted wish: {}", id);
    Ok(Json(SuccessResponse::ok()))
}
