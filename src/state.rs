use std::sync::Arc;

use crate::store::UrlStore;

/// Shared application state injected into all handlers.
///
/// Holds the single process-wide store handle, initialized once at startup
/// and shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }
}
