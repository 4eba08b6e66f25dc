//! Public-holiday proxy endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::AppState;

/// GET /api/holidays/:year - Combined holidays for all configured countries.
///
/// The year is passed through unvalidated. Any single failing country fetch
/// fails the whole request; no partial data is returned.
pub async fn get_holidays(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let holidays = state.holidays.holidays_for_year(&year).await?;
    Ok(Json(holidays))
}
