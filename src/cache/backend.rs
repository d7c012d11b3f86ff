//! Cache Backend Module
//!
//! The capability the order service needs from a cache, and the in-process
//! implementation used by the server binary.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStore, KeyPattern};
use crate::error::CacheError;

// == Cache Backend Trait ==
/// Key-value cache with TTL and glob key enumeration.
///
/// Values are opaque serialized payloads. Implementations must be safe to
/// share across concurrent requests.
#[async_trait]
pub trait CacheBackend: Send + Sync + Debug {
    /// Returns the payload stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` for `ttl`.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Lists every key matching the glob `pattern`.
    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>, CacheError>;

    /// Deletes the listed keys, returning how many existed.
    async fn delete_many(&self, keys: &[String]) -> Result<usize, CacheError>;
}

// == Memory Cache ==
/// In-process [`CacheBackend`] over a shared [`CacheStore`].
///
/// Cloning is cheap and every clone sees the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweeps expired entries, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Number of entries currently held, expired ones included until swept.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        // Write lock: expired entries are dropped on access
        Ok(self.store.write().await.get(key))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.store
            .write()
            .await
            .set_with_ttl(key.to_string(), value.to_string(), ttl)
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        let pattern = KeyPattern::new(pattern)?;
        Ok(self.store.read().await.keys_matching(&pattern))
    }

    async fn delete_many(&self, keys: &[String]) -> Result<usize, CacheError> {
        if keys.is_empty() {
            return Ok(0);
        }
        Ok(self.store.write().await.delete_many(keys))
    }
}
