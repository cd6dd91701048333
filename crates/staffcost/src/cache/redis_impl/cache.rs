//! Redis cache implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;

use staffcost_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Redis cache shared by every service instance.
///
/// `ConnectionManager` reconnects on its own, so a clone per call is all
/// the pooling needed.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects to `url`, bounding the connect and every reply by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` when the server is unreachable.
    pub async fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(timeout)
            .set_response_timeout(timeout);
        let conn = ConnectionManager::new_with_config(client, config)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

/// Expiry in milliseconds for `PSETEX`; Redis rejects a zero expiry.
fn expiry_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();
        let reply = match ttl {
            Some(ttl) => conn.pset_ex::<_, _, ()>(key, value, expiry_millis(ttl)).await,
            None => conn.set::<_, _, ()>(key, value).await,
        };
        reply.map_err(map_redis_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)
    }
}
