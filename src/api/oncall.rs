//! On-call rotation API endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::Ack;
use crate::errors::AppError;
use crate::AppState;

/// GET /api/oncall - Fetch the rotation payload.
///
/// Returns `{}` if the rotation has never been saved.
pub async fn get_rotation(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let rotation = state.store.get_rotation().await?;
    Ok(Json(rotation.unwrap_or_else(|| json!({}))))
}

/// POST /api/oncall - Replace the rotation payload wholesale.
pub async fn save_rotation(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    state.store.save_rotation(payload).await?;
    Ok(Json(Ack::new("Rotation saved")))
}
