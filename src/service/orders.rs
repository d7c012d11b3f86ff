//! Order Service
//!
//! Cache-aside reads of the paginated order list and write-through mutations
//! that clear every cached page once the store has committed.
//!
//! A read that misses, queries the store, and then writes its page after a
//! concurrent mutation has cleared the namespace leaves a stale page behind.
//! That page survives until the next mutation or its TTL; nothing here
//! serializes readers against writers.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::keys::{page_cache_key, page_window, ORDERS_KEY_PATTERN};
use crate::cache::CacheBackend;
use crate::error::{CacheError, OrderError, Result, StoreError};
use crate::models::{NewOrder, Order, OrderChanges, OrderPage, OrderStatus};
use crate::store::OrderStore;

// == Invalidation ==
/// What happened to the cached pages after a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Namespace cleared; holds the number of keys deleted
    Cleared(usize),
    /// Cache could not be cleared; list reads may be stale
    Failed(CacheError),
}

impl Invalidation {
    /// True when cached pages may no longer match the store.
    pub fn is_stale(&self) -> bool {
        matches!(self, Invalidation::Failed(_))
    }
}

// == Mutation ==
/// A committed store change plus the outcome of clearing the page cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    pub value: T,
    pub invalidation: Invalidation,
}

impl<T> Mutation<T> {
    pub fn cache_stale(&self) -> bool {
        self.invalidation.is_stale()
    }
}

// == Order Service ==
/// Orchestrates the order store and the page cache.
///
/// Cheap to clone; clones share the same store and cache.
#[derive(Debug, Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    cache: Arc<dyn CacheBackend>,
    page_ttl: Duration,
}

impl OrderService {
    // == Constructor ==
    /// Creates a service over `store`, caching list pages in `cache` for `page_ttl`.
    pub fn new(store: Arc<dyn OrderStore>, cache: Arc<dyn CacheBackend>, page_ttl: Duration) -> Self {
        Self {
            store,
            cache,
            page_ttl,
        }
    }

    // == List Orders ==
    /// Returns one page of orders, newest first, reading through the cache.
    ///
    /// A hit never touches the store and does not refresh the TTL. Cache
    /// failures degrade to a store read; store failures are never cached.
    pub async fn list_orders(&self, page: u32) -> Result<OrderPage> {
        let page = page.max(1);
        let key = page_cache_key(page);

        match self.cache.get(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<OrderPage>(&payload) {
                Ok(cached) => {
                    debug!("Page cache hit: {}", key);
                    return Ok(cached);
                }
                Err(e) => warn!("Discarding undecodable cache entry {}: {}", key, e),
            },
            Ok(None) => debug!("Page cache miss: {}", key),
            Err(e) => warn!("Page cache read failed for {}, using store: {}", key, e),
        }

        let (offset, limit) = page_window(page);
        let data = self
            .store
            .select_range(offset, limit)
            .await
            .map_err(store_failed("fetch orders"))?;

        let snapshot = OrderPage { page, data };
        self.populate(&key, &snapshot).await;
        Ok(snapshot)
    }

    // == Get Order ==
    /// Reads one order straight from the store. Never cached.
    pub async fn get_order(&self, id: i64) -> Result<Order> {
        self.store
            .select_one(id)
            .await
            .map_err(store_failed("fetch order"))?
            .ok_or(OrderError::NotFound(id))
    }

    // == List Statuses ==
    /// Returns the selectable order statuses. Never cached.
    pub async fn list_statuses(&self) -> Result<Vec<OrderStatus>> {
        self.store
            .list_statuses()
            .await
            .map_err(store_failed("fetch order statuses"))
    }

    // == Create Order ==
    /// Inserts an order with status `new`, then clears the page cache.
    pub async fn create_order(&self, order: NewOrder) -> Result<Mutation<Order>> {
        let created = self
            .store
            .insert(order)
            .await
            .map_err(store_failed("create order"))?;

        info!("Created order {}", created.id);
        Ok(self.committed(created).await)
    }

    // == Update Order ==
    /// Replaces every mutable field of order `id`, then clears the page cache.
    pub async fn update_order(&self, id: i64, changes: OrderChanges) -> Result<Mutation<Order>> {
        let updated = self
            .store
            .update(id, changes)
            .await
            .map_err(store_failed("update order"))?
            .ok_or(OrderError::NotFound(id))?;

        info!("Updated order {}", id);
        Ok(self.committed(updated).await)
    }

    // == Update Status ==
    /// Sets the status of order `id`, then clears the page cache.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Mutation<Order>> {
        let updated = self
            .store
            .update_status(id, status)
            .await
            .map_err(store_failed("update order status"))?
            .ok_or(OrderError::NotFound(id))?;

        info!("Order {} status set to {:?}", id, status);
        Ok(self.committed(updated).await)
    }

    // == Delete Order ==
    /// Deletes order `id`, then clears the page cache.
    ///
    /// Deleting a missing order is `NotFound` every time and leaves the cache alone.
    pub async fn delete_order(&self, id: i64) -> Result<Mutation<()>> {
        let existed = self
            .store
            .delete(id)
            .await
            .map_err(store_failed("delete order"))?;

        if !existed {
            return Err(OrderError::NotFound(id));
        }

        info!("Deleted order {}", id);
        Ok(self.committed(()).await)
    }

    // == Invalidate Pages ==
    /// Deletes every key under the orders namespace.
    ///
    /// Failures are logged and returned, never raised: the store change that
    /// triggered this has already committed.
    pub async fn invalidate_pages(&self) -> Invalidation {
        match self.clear_namespace().await {
            Ok(cleared) => {
                debug!("Cleared {} cached order pages", cleared);
                Invalidation::Cleared(cleared)
            }
            Err(e) => {
                warn!(
                    "Order change committed but page cache was not cleared, list reads may be stale: {}",
                    e
                );
                Invalidation::Failed(e)
            }
        }
    }

    async fn clear_namespace(&self) -> std::result::Result<usize, CacheError> {
        let keys = self.cache.keys_matching(ORDERS_KEY_PATTERN).await?;
        self.cache.delete_many(&keys).await
    }

    async fn committed<T>(&self, value: T) -> Mutation<T> {
        Mutation {
            value,
            invalidation: self.invalidate_pages().await,
        }
    }

    async fn populate(&self, key: &str, snapshot: &OrderPage) {
        let payload = match serde_json::to_string(snapshot) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not serialize page {} for caching: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set_with_ttl(key, &payload, self.page_ttl).await {
            warn!("Page cache write failed for {}: {}", key, e);
        }
    }
}

fn store_failed(action: &'static str) -> impl FnOnce(StoreError) -> OrderError {
    move |source| {
        error!("Failed to {}: {}", action, source);
        OrderError::store(action)(source)
    }
}
