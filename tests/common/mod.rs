#![allow(dead_code)]

use std::sync::Arc;
use url_redirector::state::AppState;
use url_redirector::store::{MemoryStore, UrlStore};

/// Builds an [`AppState`] over an in-memory store, returning the store handle
/// so tests can seed mappings.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    (state, store)
}

/// Builds an [`AppState`] over an arbitrary store implementation.
pub fn create_test_state_with(store: Arc<dyn UrlStore>) -> AppState {
    AppState::new(store)
}
