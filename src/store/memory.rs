//! In-memory order table
//!
//! A `BTreeMap` keyed by id, so newest-first windows are a reverse walk.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{OrderStore, StoreResult};
use crate::models::{NewOrder, Order, OrderChanges, OrderStatus};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Order>,
    /// Last id handed out; ids are never reused
    last_id: i64,
}

/// In-process [`OrderStore`]. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryOrderStore {
    /// Creates an empty table whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;

        let row = order.into_order(id, Utc::now());
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> StoreResult<Option<Order>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|row| {
            row.apply(changes, Utc::now());
            row.clone()
        }))
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> StoreResult<Option<Order>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|row| {
            row.status = status;
            row.updated_at = Utc::now();
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn select_range(&self, offset: u64, limit: u64) -> StoreResult<Vec<Order>> {
        let table = self.table.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(table
            .rows
            .values()
            .rev()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn select_one(&self, id: i64) -> StoreResult<Option<Order>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list_statuses(&self) -> StoreResult<Vec<OrderStatus>> {
        Ok(OrderStatus::ALL.to_vec())
    }
}
