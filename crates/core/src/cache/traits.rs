use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations over a shared key-value store.
///
/// Implementations report every backend failure as an error. Callers that
/// must not fail on cache trouble wrap the client instead of matching on
/// errors at each call site.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key.
    async fn delete(&self, key: &str) -> Result<()>;
}
