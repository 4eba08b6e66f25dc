//! Time-off API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::Ack;
use crate::errors::AppError;
use crate::models::{CreateTimeOffRequest, TimeOffEntry};
use crate::AppState;

/// GET /api/timeoff - List all time-off entries, newest start date first.
pub async fn list_time_off(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeOffEntry>>, AppError> {
    let entries = state.store.list_time_off().await?;
    Ok(Json(entries))
}

/// POST /api/timeoff - Create a time-off entry.
///
/// No presence validation; fields are stored as provided.
pub async fn create_time_off(
    State(state): State<AppState>,
    Json(request): Json<CreateTimeOffRequest>,
) -> Result<(StatusCode, Json<TimeOffEntry>), AppError> {
    let entry = state.store.create_time_off(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/timeoff/:id - Delete a time-off entry.
pub async fn delete_time_off(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, AppError> {
    state.store.delete_time_off(id).await?;
    Ok(Json(Ack::new("Time-off entry deleted")))
}
