//! Domain and transport models for the order service
//!
//! `order` holds the domain types; `requests` and `responses` are the DTOs
//! used for serializing/deserializing HTTP request and response bodies.

pub mod order;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use order::{NewOrder, Order, OrderChanges, OrderPage, OrderStatus};
pub use requests::{CreateOrderRequest, ListOrdersQuery, UpdateOrderRequest, UpdateStatusRequest};
pub use responses::{ErrorResponse, HealthResponse, MutationResponse};
