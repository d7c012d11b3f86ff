//! API Routes
//!
//! Configures the Axum router with all order endpoints.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_order_handler, delete_order_handler, get_order_handler, health_handler,
    list_orders_handler, list_statuses_handler, update_order_handler, update_status_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /orders` - Create an order
/// - `GET /orders?page=N` - One page of orders, newest first (cached)
/// - `GET /orders/statuses` - Selectable order statuses
/// - `GET /orders/:id` - One order
/// - `PUT /orders/:id` - Replace an order
/// - `DELETE /orders/:id` - Delete an order
/// - `PATCH /orders/:id/status` - Change an order's status
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/orders", get(list_orders_handler).post(create_order_handler))
        .route("/orders/statuses", get(list_statuses_handler))
        .route(
            "/orders/:id",
            get(get_order_handler)
                .put(update_order_handler)
                .delete(delete_order_handler),
        )
        .route("/orders/:id/status", patch(update_status_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
