//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{short_key}`
///
/// # Request Flow
///
/// 1. Extract the short key from the path (percent-decoded by axum)
/// 2. Look the key up in the store
/// 3. Return 302 Found with `Location` set to the stored URL
///
/// The stored value is used verbatim; no validation or normalization is
/// applied. Repeated requests for the same key return the same outcome as
/// long as the underlying mapping is unchanged.
///
/// # Errors
///
/// Returns 404 Not Found with a fixed plaintext body if the short key has
/// no mapping. A failed store lookup propagates as a generic 500.
pub async fn redirect_handler(
    Path(short_key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    match state.store.get(&short_key).await? {
        Some(url) => {
            debug!("Redirecting {} -> {}", short_key, url);
            // axum's Redirect offers 303/307/308 but not 302 Found, which is
            // what the original service answers with.
            Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
        }
        None => Err(AppError::NotFound),
    }
}
