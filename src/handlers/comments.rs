//! Comment handlers. Comments are immutable once posted, so there is no update route.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Comment, NewComment};
use crate::response::{deleted, Deleted};
use crate::service::{CommentService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, AppError> {
    Ok(Json(CommentService::list(state.store()).await?))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewComment>,
) -> Result<Json<Comment>, AppError> {
    let comment = RequestValidator::new_comment(body)?;
    Ok(Json(CommentService::create(state.store(), comment).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let count = CommentService::delete(state.store(), &id).await?;
    Ok(deleted(count))
}
