//! API Handlers
//!
//! HTTP request handlers for each order endpoint. Handlers only translate
//! between transport and [`OrderService`] calls.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::error::{OrderError, Result};
use crate::models::{
    CreateOrderRequest, HealthResponse, ListOrdersQuery, MutationResponse, Order, OrderPage,
    OrderStatus, UpdateOrderRequest, UpdateStatusRequest,
};
use crate::service::{parse_page, OrderService};
use crate::store::MemoryOrderStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
}

impl AppState {
    /// Creates a new AppState around an order service.
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }

    /// Wires the in-process order table and cache using the configured TTL.
    ///
    /// Returns the cache handle as well so the caller can run the sweeper.
    pub fn in_memory(config: &Config) -> (Self, MemoryCache) {
        let cache = MemoryCache::new();
        let orders = OrderService::new(
            Arc::new(MemoryOrderStore::new()),
            Arc::new(cache.clone()),
            Duration::from_secs(config.page_cache_ttl),
        );
        (Self::new(orders), cache)
    }
}

/// Handler for POST /orders
pub async fn create_order_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>)> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(OrderError::Validation(error_msg));
    }

    let mutation = state.orders.create_order(req.into()).await?;
    let stale = mutation.cache_stale();

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Order created", Some(mutation.value), stale)),
    ))
}

/// Handler for GET /orders?page=N
///
/// Reads the query as raw pairs: the first `page` wins and a malformed one means page 1.
pub async fn list_orders_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<OrderPage>> {
    let query = ListOrdersQuery::from_pairs(params);
    let page = parse_page(query.page.as_deref());
    Ok(Json(state.orders.list_orders(page).await?))
}

/// Handler for GET /orders/statuses
pub async fn list_statuses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderStatus>>> {
    Ok(Json(state.orders.list_statuses().await?))
}

/// Handler for GET /orders/:id
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>> {
    Ok(Json(state.orders.get_order(id).await?))
}

/// Handler for PUT /orders/:id
pub async fn update_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(OrderError::Validation(error_msg));
    }

    let mutation = state.orders.update_order(id, req.into()).await?;
    let stale = mutation.cache_stale();

    Ok(Json(MutationResponse::new(
        "Order updated",
        Some(mutation.value),
        stale,
    )))
}

/// Handler for PATCH /orders/:id/status
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>> {
    let Json(req) = payload?;
    let mutation = state.orders.update_status(id, req.status).await?;
    let stale = mutation.cache_stale();

    Ok(Json(MutationResponse::new(
        "Order status updated",
        Some(mutation.value),
        stale,
    )))
}

/// Handler for DELETE /orders/:id
pub async fn delete_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse>> {
    let mutation = state.orders.delete_order(id).await?;

    Ok(Json(MutationResponse::new(
        "Order deleted",
        None,
        mutation.cache_stale(),
    )))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
