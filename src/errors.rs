use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("LLM provider rejected credentials: {0}")]
    ProviderAuth(String),

    #[error("LLM provider rejected the request: {0}")]
    ProviderRequest(String),

    #[error("LLM provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Summary not found: {0}")]
    NotFound(String),

    #[error("Service not ready")]
    NotReady,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SummaryError {
    /// HTTP status the boundary layer reports for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            SummaryError::Validation(_) | SummaryError::ProviderRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            SummaryError::ProviderAuth(_) => StatusCode::UNAUTHORIZED,
            SummaryError::NotFound(_) => StatusCode::NOT_FOUND,
            SummaryError::ProviderUnavailable(_) | SummaryError::NotReady => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            SummaryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Provider details stay in the logs.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            SummaryError::Validation(msg) => msg.clone(),
            SummaryError::ProviderAuth(_) => "Invalid API credentials.".to_string(),
            SummaryError::ProviderRequest(_) => "Invalid request to LLM service.".to_string(),
            SummaryError::ProviderUnavailable(_) => {
                "LLM service error. Please retry later.".to_string()
            }
            SummaryError::NotFound(_) => "Summary not found".to_string(),
            SummaryError::NotReady => "Service not ready".to_string(),
            SummaryError::Config(_) => "Service misconfigured".to_string(),
        }
    }

    /// Whether the error comes from the completion provider.
    #[must_use]
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            SummaryError::ProviderAuth(_)
                | SummaryError::ProviderRequest(_)
                | SummaryError::ProviderUnavailable(_)
        )
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return SummaryError::ProviderUnavailable(format!("request timed out: {error}"));
        }
        if let Some(status) = error.status() {
            return crate::ai::client::classify_status(status.as_u16(), &error.to_string());
        }
        SummaryError::ProviderUnavailable(format!("HTTP request failed: {error}"))
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::ProviderUnavailable(format!("malformed completion output: {error}"))
    }
}

impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::info!(status = %status, error = %self, "request rejected");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
