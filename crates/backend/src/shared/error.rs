use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Ошибки HTTP API
///
/// Every variant is reported as 500 with `{"detail": "..."}`; the generator
/// has no client-error class of its own.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON payload: {0}")]
    InvalidPayload(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
