//! Order Store Module
//!
//! The row-level operations the order service needs from the backing store.
//! The store is the source of truth; everything cached is derived from it.

mod memory;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewOrder, Order, OrderChanges, OrderStatus};

pub use memory::MemoryOrderStore;

/// Convenience Result type for store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Order Store Trait ==
/// Row-level CRUD over the `orders` table.
///
/// Identifiers are assigned by the store and never reused for another row.
/// Update and delete report a missing row through their return value, not
/// through an error.
#[async_trait]
pub trait OrderStore: Send + Sync + Debug {
    /// Inserts a row and returns it with its assigned id.
    async fn insert(&self, order: NewOrder) -> StoreResult<Order>;

    /// Replaces every mutable field of row `id`. `None` if no such row.
    async fn update(&self, id: i64, changes: OrderChanges) -> StoreResult<Option<Order>>;

    /// Sets only the status of row `id`. `None` if no such row.
    async fn update_status(&self, id: i64, status: OrderStatus) -> StoreResult<Option<Order>>;

    /// Physically removes row `id`. `false` if no such row.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Returns up to `limit` rows ordered by id descending, skipping `offset`.
    async fn select_range(&self, offset: u64, limit: u64) -> StoreResult<Vec<Order>>;

    /// Returns row `id`, if any.
    async fn select_one(&self, id: i64) -> StoreResult<Option<Order>>;

    /// Returns the selectable order statuses.
    async fn list_statuses(&self) -> StoreResult<Vec<OrderStatus>>;
}
