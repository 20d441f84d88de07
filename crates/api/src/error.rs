//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use user_store::UserStoreError;

/// API-level error type that maps to HTTP responses.
///
/// Collaborator failures are not recovered from: they surface as a 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The user repository failed.
    #[error("user store error: {0}")]
    Store(#[from] UserStoreError),
    /// A view failed to render.
    #[error("render error: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "internal server error");

        let body = serde_json::json!({ "error": "internal server error" });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
