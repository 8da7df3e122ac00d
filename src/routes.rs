//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET /{short_key}` - Short link redirect (public)
//! - `GET /health`      - Health check: store connectivity (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::handlers::{health_handler, redirect_handler};
use crate::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `/health` is registered before the catch-all `/{short_key}` route;
/// axum matches the literal path first, so `health` itself is not usable
/// as a short key.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{short_key}", get(redirect_handler))
        .with_state(state)
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
