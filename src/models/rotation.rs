//! On-call rotation model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed key addressing the single rotation document.
///
/// The `oncall` collection intentionally holds exactly one document; writes
/// upsert against this key and reads look it up directly.
pub const SCHEDULE_NAME: &str = "primary";

/// The singleton on-call rotation document.
///
/// `rotation_data` is an opaque caller-defined payload; the service never
/// inspects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnCallRotation {
    pub schedule: String,
    pub rotation_data: Value,
}
