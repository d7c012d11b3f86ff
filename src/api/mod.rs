//! API Module
//!
//! HTTP handlers and routing for the order REST API.
//!
//! # Endpoints
//! - `POST /orders` - Create an order
//! - `GET /orders?page=N` - List orders, newest first
//! - `GET /orders/statuses` - List order statuses
//! - `GET|PUT|DELETE /orders/:id` - Read, replace or delete an order
//! - `PATCH /orders/:id/status` - Change an order's status
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
