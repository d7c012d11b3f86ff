//! Error types for the order service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Failures reported by a cache backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key or value rejected by the backend
    #[error("Invalid cache request: {0}")]
    InvalidRequest(String),

    /// Glob pattern could not be compiled
    #[error("Invalid key pattern: {0}")]
    InvalidPattern(String),

    /// Backend could not be reached or refused the command
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == Store Error Enum ==
/// Failures reported by the backing order store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store rejected the statement (constraint, malformed row, ...)
    #[error("Store rejected operation: {0}")]
    Rejected(String),

    /// Store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// == Order Error Enum ==
/// Error surfaced by the order service and its HTTP handlers.
#[derive(Error, Debug)]
pub enum OrderError {
    /// Malformed request payload
    #[error("Invalid request: {0}")]
    Validation(String),

    /// No order with the given identifier
    #[error("Order not found: {0}")]
    NotFound(i64),

    /// Backing store failed; `action` names what was attempted
    #[error("Failed to {action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl OrderError {
    /// Wraps a store failure with the action that triggered it.
    pub fn store(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| OrderError::Store { action, source }
    }
}

// == Body Rejections ==
impl From<JsonRejection> for OrderError {
    fn from(rejection: JsonRejection) -> Self {
        OrderError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            OrderError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            OrderError::NotFound(_) => (StatusCode::NOT_FOUND, "Order not found".to_string()),
            // Store detail stays in the logs
            OrderError::Store { action, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {}", action))
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the order service.
pub type Result<T> = std::result::Result<T, OrderError>;
