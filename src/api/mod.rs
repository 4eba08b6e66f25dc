//! REST API module.
//!
//! Contains all API route handlers. Responses are plain JSON bodies; errors
//! go through [`crate::errors::AppError`] and its shared envelope.

mod holidays;
mod members;
mod oncall;
mod timeoff;

pub use holidays::*;
pub use members::*;
pub use oncall::*;
pub use timeoff::*;

use serde::Serialize;

/// Acknowledgment body for delete and save operations.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
