//! Read-Through Engine
//!
//! Serves cached results, computes and stores misses, and records tombstones
//! for misses that fail or produce nothing.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::CachedOperation;
use crate::codec::{self, Payload};
use crate::error::{CacheError, Result};
use crate::key::Arg;
use crate::store::CacheStore;

// == Cache Interceptor ==
/// Wraps computations with read-through caching against a [`CacheStore`].
///
/// No per-key coordination is done: concurrent misses on the same key all
/// run the computation and the last write wins.
#[derive(Debug, Clone)]
pub struct CacheInterceptor<S> {
    store: S,
}

impl<S: CacheStore> CacheInterceptor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // == Call ==
    /// Runs `compute` behind the cache entry selected by `op` and `args`.
    ///
    /// - A stored value is decoded and returned without running `compute`.
    /// - A stored tombstone yields `NotFound` without running `compute`.
    /// - On a miss, a returned value is stored under the policy's value ttl;
    ///   `Ok(None)` or an error stores a tombstone under the default
    ///   namespace's ttl and yields `NotFound`, with the error kept as its
    ///   source.
    ///
    /// # Errors
    /// - `Configuration` / `Binding` if the key cannot be built
    /// - `NotFound` as described above
    /// - `Serialization` if a cached payload cannot be decoded (the entry is
    ///   left in place) or a fresh result cannot be encoded
    /// - `Store` if the store fails
    pub async fn call<T, F, Fut>(&self, op: &CachedOperation, args: &[Arg], compute: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Option<T>>>,
    {
        let key = op.cache_key(args)?;

        match self.store.get(&key).await?.map(Payload::from_stored) {
            Some(Payload::Value(raw)) => {
                info!(operation = op.name(), key = %key, "cache hit");
                return codec::decode(&raw);
            }
            Some(Payload::Tombstone) => {
                info!(operation = op.name(), key = %key, "cache hit on empty marker");
                return Err(CacheError::not_found(key));
            }
            None => debug!(operation = op.name(), key = %key, "cache miss"),
        }

        let (value, cause) = match compute().await {
            Ok(Some(value)) => (Some(value), None),
            Ok(None) => (None, None),
            Err(err) => (None, Some(err)),
        };

        let Some(value) = value else {
            info!(operation = op.name(), key = %key, "caching empty marker");
            let (ttl, unit) = op.policy().tombstone_ttl();
            self.store
                .set(&key, Payload::Tombstone.into_stored(), ttl, unit)
                .await?;
            return Err(CacheError::NotFound { key, source: cause });
        };

        let payload = codec::encode(&value)?;
        let (ttl, unit) = op.policy().value_ttl();
        info!(operation = op.name(), key = %key, ttl, ?unit, "caching value");
        self.store.set(&key, payload.into_stored(), ttl, unit).await?;
        Ok(value)
    }
}
