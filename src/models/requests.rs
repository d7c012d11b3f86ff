//! Request DTOs for the order API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{NewOrder, OrderChanges, OrderStatus};

/// Maximum length accepted for short text fields.
const MAX_NAME_LENGTH: usize = 255;

/// Request body for POST /orders
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub owner_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub quantity: u32,
    #[serde(default)]
    pub note: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl CreateOrderRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_fields(
            &self.name,
            &self.order_type,
            self.quantity,
            self.start_date,
            self.due_date,
        )
    }
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            owner_id: req.owner_id,
            name: req.name,
            order_type: req.order_type,
            quantity: req.quantity,
            note: req.note,
            start_date: req.start_date,
            due_date: req.due_date,
        }
    }
}

/// Request body for PUT /orders/:id
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderRequest {
    pub owner_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub quantity: u32,
    #[serde(default)]
    pub note: String,
    pub status: OrderStatus,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl UpdateOrderRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_fields(
            &self.name,
            &self.order_type,
            self.quantity,
            self.start_date,
            self.due_date,
        )
    }
}

impl From<UpdateOrderRequest> for OrderChanges {
    fn from(req: UpdateOrderRequest) -> Self {
        OrderChanges {
            owner_id: req.owner_id,
            name: req.name,
            order_type: req.order_type,
            quantity: req.quantity,
            note: req.note,
            status: req.status,
            start_date: req.start_date,
            due_date: req.due_date,
        }
    }
}

/// Request body for PATCH /orders/:id/status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Query string for GET /orders
///
/// Built from the raw key/value pairs so a repeated `page` is not rejected
/// by the extractor. Malformed values fall back to page 1 in `parse_page`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrdersQuery {
    pub page: Option<String>,
}

impl ListOrdersQuery {
    /// Keeps the first `page` value; later repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value),
        }
    }
}

fn validate_fields(
    name: &str,
    order_type: &str,
    quantity: u32,
    start_date: NaiveDate,
    due_date: NaiveDate,
) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Order name cannot be empty".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Some(format!(
            "Order name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if order_type.trim().is_empty() {
        return Some("Order type cannot be empty".to_string());
    }
    if quantity == 0 {
        return Some("Quantity must be greater than zero".to_string());
    }
    if due_date < start_date {
        return Some("Due date cannot be before start date".to_string());
    }
    None
}
