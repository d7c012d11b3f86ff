//! Cache Store Module
//!
//! HashMap-backed key-value storage with TTL expiration and glob key scans.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, KeyPattern, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::CacheError;

// == Cache Store ==
/// Single-threaded cache storage. Wrap it in a lock to share it.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Set With TTL ==
    /// Stores a payload under `key`, replacing any previous entry and its TTL.
    pub fn set_with_ttl(
        &mut self,
        key: String,
        value: String,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        self.entries.insert(key, CacheEntry::new(value, Some(ttl)));
        Ok(())
    }

    // == Get ==
    /// Returns the payload if present and not expired.
    ///
    /// Expired entries are dropped on access. Reads never refresh the TTL.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Keys Matching ==
    /// Lists live keys matching `pattern`, in no particular order.
    pub fn keys_matching(&self, pattern: &KeyPattern) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(key, entry)| !entry.is_expired() && pattern.matches(key))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Delete Many ==
    /// Removes every listed key. Returns how many were actually present.
    pub fn delete_many(&mut self, keys: &[String]) -> usize {
        keys.iter()
            .filter(|key| self.entries.remove(key.as_str()).is_some())
            .count()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
