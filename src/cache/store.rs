//! Memory Store Module
//!
//! In-process key-value storage with per-entry expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::Result;
use crate::policy::TimeUnit;
use crate::store::CacheStore;

// == Memory Store ==
/// HashMap-backed storage where entries disappear once their ttl elapses.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value, replacing any previous entry and its expiry.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the live value for `key`. Expired entries are removed and
    /// count as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expired(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Remaining lifetime of a live entry in milliseconds.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining_ms)
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Shared Store ==
/// Cloneable handle to a [`MemoryStore`] usable as a [`CacheStore`].
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<MemoryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.inner.read().await.ttl_remaining_ms(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[async_trait]
impl CacheStore for SharedStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // write lock: expired entries are dropped on read
        Ok(self.inner.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl: u64, unit: TimeUnit) -> Result<()> {
        self.inner
            .write()
            .await
            .set(key.to_string(), value, unit.to_duration(ttl));
        Ok(())
    }
}
