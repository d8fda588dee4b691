//! HTTP boundary: routing, request validation and response shaping

pub mod extras;
pub mod helpers;
pub mod parsing;
pub mod summary;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::routing::get;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

use crate::core::config::DEFAULT_MIN_TEXT_LENGTH;
use crate::errors::SummaryError;
use crate::features::SummaryService;

/// Shared handler state.
///
/// The service slot is filled once at startup; until then every data route
/// answers "service not ready".
#[derive(Clone)]
pub struct AppState {
    service: Arc<OnceCell<SummaryService>>,
    min_text_length: usize,
}

impl AppState {
    /// State whose service has not been initialised yet.
    #[must_use]
    pub fn new(min_text_length: usize) -> Self {
        Self {
            service: Arc::new(OnceCell::new()),
            min_text_length,
        }
    }

    /// State that is ready to serve.
    #[must_use]
    pub fn ready(service: SummaryService, min_text_length: usize) -> Self {
        let state = Self::new(min_text_length);
        let _ = state.service.set(service);
        state
    }

    /// # Errors
    ///
    /// Returns `SummaryError::Config` if the service was already initialised.
    pub fn initialize(&self, service: SummaryService) -> Result<(), SummaryError> {
        self.service
            .set(service)
            .map_err(|_| SummaryError::Config("summary service already initialised".to_string()))
    }

    /// # Errors
    ///
    /// `SummaryError::NotReady` before [`AppState::initialize`] has run.
    pub fn service(&self) -> Result<&SummaryService, SummaryError> {
        self.service.get().ok_or(SummaryError::NotReady)
    }

    #[must_use]
    pub fn min_text_length(&self) -> usize {
        self.min_text_length
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TEXT_LENGTH)
    }
}

pub fn router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            info_span!(
                "http.request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_request(|_req: &Request<Body>, _span: &tracing::Span| {
            info!("request.start");
        })
        .on_response(|res: &Response, latency: Duration, _span: &tracing::Span| {
            info!(status = %res.status(), latency_ms = %latency.as_millis(), "request.end");
        })
        .on_failure(|err: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span| {
            tracing::error!(error = %err, latency_ms = %latency.as_millis(), "request.failure");
        });

    Router::new()
        .route("/", get(helpers::root))
        .nest("/summary_maker", summary::router())
        .nest("/extras", extras::router())
        .fallback(helpers::fallback_404)
        .layer(trace)
        .with_state(state)
}
