//! Redis-backed store implementation.

use super::{StoreError, StoreResult, UrlStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis store implementation for short key lookups.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnection.
/// Keys are looked up verbatim; the shortening subsystem writes them without
/// a namespace prefix, so none is applied here.
///
/// Unlike a cache, this store is the system of record for this service:
/// lookup failures are returned to the caller instead of being treated as
/// misses, so a broken Redis connection surfaces as a 5xx rather than a 404.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl UrlStore for RedisStore {
    async fn get(&self, short_key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(short_key).await {
            Ok(Some(url)) => {
                debug!("Store HIT: {} -> {}", short_key, url);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Store MISS: {}", short_key);
                Ok(None)
            }
            Err(e) => Err(StoreError::Operation(format!(
                "Redis GET failed for {}: {}",
                short_key, e
            ))),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
