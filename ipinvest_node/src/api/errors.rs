//! API error handling for the IPInvest node.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::royalty::RoyaltyError;
use crate::splitter::ChainError;
use crate::storage::StoreError;

/// Error payload returned by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub timestamp: u64,
}

impl ApiError {
    pub fn new(code: u16, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            timestamp: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn with_details(code: u16, message: String, details: serde_json::Value) -> Self {
        Self {
            code,
            message,
            details: Some(details),
            timestamp: chrono::Utc::now().timestamp() as u64,
        }
    }

    // Common error constructors
    pub fn bad_request(message: &str) -> Self {
        Self::new(400, message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(404, message.to_string())
    }

    pub fn unprocessable_entity(message: &str) -> Self {
        Self::new(422, message.to_string())
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::new(500, message.to_string())
    }

    pub fn service_unavailable(message: &str) -> Self {
        Self::new(503, message.to_string())
    }

    // Marketplace-specific errors
    pub fn idea_not_found(idea_id: &str) -> Self {
        Self::with_details(
            404,
            "Idea not found".to_string(),
            serde_json::json!({ "idea_id": idea_id }),
        )
    }

    pub fn oversell(requested: u64, available: u64) -> Self {
        Self::with_details(
            400,
            "Not enough tokens available".to_string(),
            serde_json::json!({
                "requested": requested,
                "available": available,
            }),
        )
    }

    pub fn insufficient_participants() -> Self {
        Self::with_details(
            422,
            "Insufficient participants".to_string(),
            serde_json::json!({
                "reason": "royalty allocation requires at least one investor holding tokens"
            }),
        )
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::with_details(
            422,
            "Validation error".to_string(),
            serde_json::json!({
                "field": field,
                "reason": reason,
            }),
        )
    }

    pub fn chain_unavailable(reason: &str) -> Self {
        Self::with_details(
            503,
            "Chain query failed".to_string(),
            serde_json::json!({ "reason": reason }),
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::not_found(&format!("Not found: {what}")),
            StoreError::Oversell {
                requested,
                available,
            } => Self::oversell(requested, available),
            StoreError::InvalidData(reason) => Self::bad_request(&reason),
        }
    }
}

impl From<RoyaltyError> for ApiError {
    fn from(err: RoyaltyError) -> Self {
        match err {
            RoyaltyError::InsufficientParticipants => Self::insufficient_participants(),
        }
    }
}

impl From<ChainError> for ApiError {
    fn from(err: ChainError) -> Self {
        Self::chain_unavailable(&err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal_server_error(&format!("JSON encoding error: {err}"))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal_server_error(&err.to_string())
    }
}
