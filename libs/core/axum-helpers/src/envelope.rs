//! The uniform response wrapper returned by every API operation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard response envelope.
///
/// Every API response carries this structure:
/// - `success`: operation outcome flag
/// - `message`: human-readable message, empty on most success paths
/// - `data`: the payload; omitted entirely when there is none
///
/// The flag is set per call site rather than derived from the HTTP status:
/// parts of the legacy wire contract return `success: false` with a 2xx
/// status, and callers branch on status plus flag.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "message": "",
///   "data": { "_id": "0192d3a8-...", "name": "Pen" }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiEnvelope<T> {
    /// Operation outcome flag
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Payload, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope carrying a payload and an empty message.
    pub fn with_data(success: bool, data: T) -> Self {
        Self {
            success,
            message: String::new(),
            data: Some(data),
        }
    }

    /// Envelope carrying only a message, no `data` key.
    pub fn message(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            data: None,
        }
    }
}
