//! The query cache itself.
//!
//! Read semantics follow the stale-while-revalidate model:
//!
//! - fresh hit: cached value, no fetch
//! - stale hit: cached value returned immediately, one background
//!   refetch task spawned (at most one per key at a time)
//! - miss: the fetch runs; concurrent callers for the same key await the
//!   same in-flight result instead of fetching again
//!
//! Values are stored as [`serde_json::Value`] and round-tripped through
//! serde on the way in and out, so one cache serves every typed query.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::key::QueryKey;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Per-entry freshness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Age beyond which a cached entry is served stale and refetched in
    /// the background.
    pub stale_after: Duration,
}

impl CachePolicy {
    /// Policy with the given stale time.
    pub const fn new(stale_after: Duration) -> Self {
        Self { stale_after }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures internal to the cache.
///
/// Fetch failures are the caller's error type and pass through
/// untouched; this only covers the serde round-trip of stored values.
#[derive(Debug, Error)]
pub enum CacheError {
    /// A value could not be encoded for storage or decoded on read.
    #[error("cache value round-trip failed: {0}")]
    Codec(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Entry {
    value: serde_json::Value,
    fetched_at: Instant,
}

#[derive(Debug, Default)]
struct Inner {
    entries: RwLock<HashMap<QueryKey, Entry>>,
    /// Per-key gates serializing concurrent fetches for the same key.
    gates: Mutex<HashMap<QueryKey, Arc<Mutex<()>>>>,
    /// Keys with a background refetch currently in flight.
    refetching: Mutex<HashSet<QueryKey>>,
}

impl Inner {
    async fn lookup(&self, key: &QueryKey) -> Option<(serde_json::Value, Duration)> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .map(|e| (e.value.clone(), e.fetched_at.elapsed()))
    }

    async fn store(&self, key: QueryKey, value: serde_json::Value) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            Entry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }
}

/// Keyed async query cache. Cheap to clone; clones share storage.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read through the cache.
    ///
    /// `fetch` runs on a miss, or in the background after a stale hit.
    /// The caller's error type must absorb [`CacheError`] for the serde
    /// round-trip of stored values.
    pub async fn get_with<T, E, F, Fut>(
        &self,
        key: &QueryKey,
        policy: CachePolicy,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        E: From<CacheError> + Display + Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        if let Some((value, age)) = self.inner.lookup(key).await {
            if age > policy.stale_after {
                tracing::debug!(%key, ?age, "stale hit, refetching in background");
                self.spawn_refetch(key.clone(), fetch);
            } else {
                tracing::trace!(%key, "fresh hit");
            }
            return serde_json::from_value(value).map_err(|e| E::from(CacheError::Codec(e)));
        }

        let gate = self.gate(key).await;
        let _guard = gate.lock().await;

        // Another caller may have completed the fetch while this one
        // waited on the gate.
        if let Some((value, _)) = self.inner.lookup(key).await {
            tracing::trace!(%key, "filled while waiting");
            return serde_json::from_value(value).map_err(|e| E::from(CacheError::Codec(e)));
        }

        tracing::debug!(%key, "miss, fetching");
        let result = match fetch().await {
            Ok(fetched) => match serde_json::to_value(&fetched) {
                Ok(value) => {
                    self.inner.store(key.clone(), value).await;
                    Ok(fetched)
                }
                Err(e) => Err(E::from(CacheError::Codec(e))),
            },
            Err(err) => Err(err),
        };
        // The gate is removed on failure too, or the map grows by one
        // orphaned mutex per failed key.
        self.drop_gate(key).await;
        result
    }

    /// Remove every entry whose key starts with `prefix`.
    ///
    /// Returns the number of entries removed. The next read of a removed
    /// key fetches again.
    pub async fn invalidate_prefix(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.inner.entries.write().await;
        let before = entries.len();
        entries.retain(|k, _| !k.starts_with(prefix));
        let removed = before.saturating_sub(entries.len());
        drop(entries);
        if removed > 0 {
            tracing::debug!(%prefix, removed, "invalidated");
        }
        removed
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.inner.entries.read().await.len()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.entries.read().await.is_empty()
    }

    /// Refresh `key` on a fixed interval, independent of staleness.
    ///
    /// The first refresh happens immediately. Returns the task handle so
    /// the caller can abort the poller; dropping the handle leaves it
    /// running for the life of the runtime.
    pub fn spawn_poller<T, E, F, Fut>(
        &self,
        key: QueryKey,
        interval: Duration,
        fetch: F,
    ) -> JoinHandle<()>
    where
        T: Serialize + Send + 'static,
        E: Display + Send + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                match fetch().await {
                    Ok(value) => match serde_json::to_value(&value) {
                        Ok(json) => inner.store(key.clone(), json).await,
                        Err(err) => tracing::warn!(%key, %err, "poll result not storable"),
                    },
                    Err(err) => tracing::warn!(%key, %err, "poll fetch failed"),
                }
            }
        })
    }

    fn spawn_refetch<T, E, F, Fut>(&self, key: QueryKey, fetch: F)
    where
        T: Serialize + Send + 'static,
        E: Display + Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            {
                let mut refetching = inner.refetching.lock().await;
                if !refetching.insert(key.clone()) {
                    return;
                }
            }
            match fetch().await {
                Ok(value) => match serde_json::to_value(&value) {
                    Ok(json) => inner.store(key.clone(), json).await,
                    Err(err) => tracing::warn!(%key, %err, "refetch result not storable"),
                },
                Err(err) => tracing::warn!(%key, %err, "background refetch failed"),
            }
            inner.refetching.lock().await.remove(&key);
        });
    }

    async fn gate(&self, key: &QueryKey) -> Arc<Mutex<()>> {
        let mut gates = self.inner.gates.lock().await;
        Arc::clone(gates.entry(key.clone()).or_default())
    }

    async fn drop_gate(&self, key: &QueryKey) {
        self.inner.gates.lock().await.remove(key);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
