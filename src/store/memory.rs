//! In-memory store implementation for tests and local development.

use super::{StoreResult, UrlStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A store backed by a process-local hash map.
///
/// Used in tests and for running the service without Redis. Entries are
/// seeded up front via [`MemoryStore::insert`]; there is no expiration.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a short key → URL mapping.
    pub fn insert(&self, short_key: impl Into<String>, url: impl Into<String>) {
        self.entries
            .write()
            .expect("store lock poisoned")
            .insert(short_key.into(), url.into());
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn get(&self, short_key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .entries
            .read()
            .expect("store lock poisoned")
            .get(short_key)
            .cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
