//! Store Adapter Module
//!
//! The key-value capability the interceptor reads through.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::policy::TimeUnit;

// == Cache Store ==
/// A shared key-value store with per-entry expiry.
///
/// Implementations must be safe for concurrent use; the interceptor issues
/// independent `get` and `set` calls and holds no state of its own.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the raw stored string, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl` of `unit`.
    async fn set(&self, key: &str, value: String, ttl: u64, unit: TimeUnit) -> Result<()>;
}

#[async_trait]
impl<S: CacheStore + ?Sized> CacheStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: u64, unit: TimeUnit) -> Result<()> {
        (**self).set(key, value, ttl, unit).await
    }
}
