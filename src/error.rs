use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::store::StoreError;

/// Fixed body for unknown short keys, kept byte-identical to the original
/// backend's response.
pub const NOT_FOUND_MESSAGE: &str = "URL을 찾을 수 없습니다.";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: &'static str,
}

#[derive(Debug)]
pub enum AppError {
    /// Short key has no mapping in the store. Rendered as a plaintext 404.
    NotFound,
    /// The store lookup itself failed. Rendered as a generic 500; the
    /// underlying error is logged, not exposed to the client.
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            AppError::Store(e) => {
                tracing::error!("Store lookup failed: {}", e);

                let body = ErrorBody {
                    error: ErrorInfo {
                        code: "internal_error",
                        message: "Internal server error",
                    },
                };

                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
