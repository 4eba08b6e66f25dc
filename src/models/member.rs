//! Team member model.

use serde::{Deserialize, Serialize};

/// A team member who can take time off and appear in the on-call rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
}

/// Request body for creating a new team member.
///
/// `name` is optional here so an absent field is rejected by the handler
/// with a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
}
