//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using
//! tokio synchronization primitives and LRU eviction policy.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use staffcost_core::cache::{Cache, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    /// Creates a new cache entry with optional TTL.
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    /// Returns true if this entry has expired.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Expired entries are dropped lazily, when they are next read.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` values.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Number of values currently held, expired ones included.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        let expired = match store.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            store.pop(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }
}
