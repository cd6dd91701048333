//! Fail-safe cache wrapper.
//!
//! The cache only ever speeds reads up. This wrapper turns every backend
//! failure into a miss (for reads) or a no-op (for writes and deletes),
//! logs it at error level, and bounds each call with a timeout so a slow
//! cache cannot stall a request. Repositories talk to the cache only
//! through this type.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use staffcost_core::cache::{Cache, CacheError};

/// Default upper bound for a single cache call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(500);

/// A cache client that never fails.
#[derive(Clone)]
pub struct FailSafeCache {
    inner: Arc<dyn Cache>,
    ttl: Duration,
    timeout: Duration,
}

impl FailSafeCache {
    /// Wraps a raw cache client. Every value written gets the given TTL.
    pub fn new(inner: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Sets the upper bound for a single cache call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads a value. Any failure is reported as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.guard("get", key, self.inner.get(key))
            .await
            .flatten()
    }

    /// Writes a value with the configured TTL. Failures are logged and dropped.
    pub async fn set(&self, key: &str, value: &[u8]) {
        self.guard("set", key, self.inner.set(key, value, Some(self.ttl)))
            .await;
    }

    /// Removes a value. Failures are logged and dropped; the entry then
    /// lives until its TTL runs out.
    pub async fn delete(&self, key: &str) {
        self.guard("delete", key, self.inner.delete(key)).await;
    }

    async fn guard<T>(
        &self,
        operation: &'static str,
        key: &str,
        call: impl Future<Output = Result<T, CacheError>>,
    ) -> Option<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                tracing::error!(operation, key, error = %err, "Cache operation failed");
                None
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    key,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Cache operation timed out"
                );
                None
            }
        }
    }
}
