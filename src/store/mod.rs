//! Key-value store access for short key → URL mappings.
//!
//! Provides the [`UrlStore`] trait with two implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-memory store for tests and local development

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use async_trait::async_trait;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),
    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for looking up short key → URL mappings.
///
/// The mapping is owned by an external subsystem; this service only reads it.
/// Implementations must be thread-safe. A lookup has exactly two successful
/// shapes: the original URL, or absence. Transport failures are returned as
/// errors and propagate to the caller unchanged (no retries, no fallback).
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Retrieves the original URL for a short key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` when the key is present
    /// - `Ok(None)` when the key is absent or expired
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Operation`] if the lookup itself fails
    /// (connection loss, timeout inside the client).
    async fn get(&self, short_key: &str) -> StoreResult<Option<String>>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health check endpoint to report store status.
    async fn health_check(&self) -> bool;
}
