//! Member API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::Ack;
use crate::errors::AppError;
use crate::models::{CreateMemberRequest, TeamMember};
use crate::AppState;

/// GET /api/members - List all members, sorted by name.
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMember>>, AppError> {
    let members = state.store.list_members().await?;
    Ok(Json(members))
}

/// POST /api/members - Create a new member.
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>), AppError> {
    // Validate required fields
    let Some(name) = request.name.as_deref().filter(|n| !n.trim().is_empty()) else {
        return Err(AppError::Validation("Name is required".to_string()));
    };

    let member = state.store.create_member(name).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// DELETE /api/members/:id - Delete a member and all their time-off entries.
///
/// Acknowledges success whether or not anything matched.
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, AppError> {
    state.store.delete_member(id).await?;
    Ok(Json(Ack::new("Member deleted")))
}
