//! Shared test doubles for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;

use orderdesk::cache::{CacheBackend, MemoryCache};
use orderdesk::error::{CacheError, StoreError};
use orderdesk::models::{NewOrder, Order, OrderChanges, OrderStatus};
use orderdesk::store::{MemoryOrderStore, OrderStore, StoreResult};
use orderdesk::OrderService;

pub const WEEK: Duration = Duration::from_secs(604_800);

pub fn new_order(name: &str) -> NewOrder {
    NewOrder {
        owner_id: 1,
        name: name.to_string(),
        order_type: "print".to_string(),
        quantity: 2,
        note: String::new(),
        start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2026, 4, 8).unwrap(),
    }
}

// == Gate ==
/// Pauses a list query after it has read the store and before it returns.
#[derive(Debug, Default)]
pub struct Gate {
    /// Signalled once the paused query has read its rows
    pub queried: Notify,
    /// Signal to let the paused query return
    pub release: Notify,
}

// == Test Store ==
/// [`MemoryOrderStore`] with access counters, a failure switch and an
/// optional gate on list queries.
#[derive(Debug, Default)]
pub struct TestStore {
    pub inner: MemoryOrderStore,
    pub range_reads: AtomicUsize,
    pub failing: AtomicBool,
    gate: std::sync::Mutex<Option<Arc<Gate>>>,
}

impl TestStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn range_reads(&self) -> usize {
        self.range_reads.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Arms a gate for the next list query only.
    pub fn arm_gate(&self) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OrderStore for TestStore {
    async fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        self.check()?;
        self.inner.insert(order).await
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> StoreResult<Option<Order>> {
        self.check()?;
        self.inner.update(id, changes).await
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> StoreResult<Option<Order>> {
        self.check()?;
        self.inner.update_status(id, status).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        self.check()?;
        self.inner.delete(id).await
    }

    async fn select_range(&self, offset: u64, limit: u64) -> StoreResult<Vec<Order>> {
        self.range_reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let rows = self.inner.select_range(offset, limit).await?;

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.queried.notify_one();
            gate.release.notified().await;
        }
        Ok(rows)
    }

    async fn select_one(&self, id: i64) -> StoreResult<Option<Order>> {
        self.check()?;
        self.inner.select_one(id).await
    }

    async fn list_statuses(&self) -> StoreResult<Vec<OrderStatus>> {
        self.check()?;
        self.inner.list_statuses().await
    }
}

// == Flaky Cache ==
/// [`MemoryCache`] whose reads, writes and scans can be switched off, with a
/// write counter.
#[derive(Debug, Default)]
pub struct FlakyCache {
    pub inner: MemoryCache,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fail_scans: AtomicBool,
    pub writes: AtomicUsize,
}

impl FlakyCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn down(flag: &AtomicBool) -> Result<(), CacheError> {
        if flag.load(Ordering::SeqCst) {
            Err(CacheError::Unavailable("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheBackend for FlakyCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Self::down(&self.fail_reads)?;
        self.inner.get(key).await
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        Self::down(&self.fail_writes)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_with_ttl(key, value, ttl).await
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        Self::down(&self.fail_scans)?;
        self.inner.keys_matching(pattern).await
    }

    async fn delete_many(&self, keys: &[String]) -> Result<usize, CacheError> {
        Self::down(&self.fail_scans)?;
        self.inner.delete_many(keys).await
    }
}

/// Service wired to fresh doubles.
pub fn service() -> (OrderService, Arc<TestStore>, Arc<FlakyCache>) {
    let store = TestStore::new();
    let cache = FlakyCache::new();
    let service = OrderService::new(store.clone(), cache.clone(), WEEK);
    (service, store, cache)
}
