//! Guest CRUD handlers.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Guest, GuestPatch, NewGuest};
use crate::response::{ack, deleted, Ack, Deleted};
use crate::service::{GuestService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Guest>>, AppError> {
    let guests = GuestService::list(state.store()).await?;
    Ok(Json(guests))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Guest>, AppError> {
    let guest = GuestService::read(state.store(), &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(guest))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewGuest>,
) -> Result<Json<Guest>, AppError> {
    let guest = RequestValidator::new_guest(body)?;
    let created = GuestService::create(state.store(), guest).await?;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<GuestPatch>,
) -> Result<Json<Ack>, AppError> {
    let patch = RequestValidator::guest_patch(body)?;
    GuestService::update(state.store(), &id, &patch).await?;
    Ok(ack())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let count = GuestService::delete(state.store(), &id).await?;
    Ok(deleted(count))
}
