//! Response DTOs for the order API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Order;

/// Response body for every mutating endpoint
///
/// `cache_stale` is true when the change was committed but cached order pages
/// could not be cleared, so list reads may lag until the next successful
/// change or until the page TTL runs out.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Human-readable outcome
    pub message: String,
    /// The order as stored after the change, absent for deletes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    pub cache_stale: bool,
}

impl MutationResponse {
    /// Creates a new MutationResponse
    pub fn new(message: impl Into<String>, order: Option<Order>, cache_stale: bool) -> Self {
        Self {
            message: message.into(),
            order,
            cache_stale,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_omits_order() {
        let resp = MutationResponse::new("Order deleted", None, false);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["message"], "Order deleted");
        assert_eq!(json["cache_stale"], false);
        assert!(json.get("order").is_none());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Failed to fetch orders");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Failed to fetch orders"}"#);
    }
}
