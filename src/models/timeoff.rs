//! Time-off entry model.

use serde::{Deserialize, Serialize};

/// A time-off entry for a team member.
///
/// Every payload field is optional and stored exactly as provided: there is
/// no check that `member_id` refers to an existing member, no date-format
/// validation, and no `start_date <= end_date` check. Dates are expected as
/// `YYYY-MM-DD` strings so lexicographic order equals chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffEntry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for creating a time-off entry. No field is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeOffRequest {
    #[serde(default)]
    pub member_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TimeOffEntry {
    /// Build an entry from a creation request and an assigned id.
    pub fn from_request(id: i64, request: CreateTimeOffRequest) -> Self {
        Self {
            id,
            member_id: request.member_id,
            kind: request.kind,
            start_date: request.start_date,
            end_date: request.end_date,
            notes: request.notes,
        }
    }
}
