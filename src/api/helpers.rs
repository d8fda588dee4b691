//! Common helper functions for API handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::errors::SummaryError;

/// Liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

pub async fn fallback_404() -> impl IntoResponse {
    err_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": message })))
}

/// Malformed or mistyped request bodies are client errors.
#[must_use]
pub fn json_rejection(rejection: JsonRejection) -> SummaryError {
    SummaryError::Validation(rejection.body_text())
}
