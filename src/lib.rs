//! # URL Redirector
//!
//! The redirect edge of a URL-shortening service, built with Axum and Redis.
//!
//! Given a short key in the request path, the service looks up the original
//! URL in Redis and answers with a 302 redirect, or a 404 when the key is
//! unknown. Mapping creation, expiration, and deletion are owned by an
//! external shortening subsystem; this service only reads.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use error::AppError;
pub use state::AppState;
