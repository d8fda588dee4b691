//! `/summary_maker` routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::{AppState, helpers, parsing};
use crate::core::models::{BatchResponse, SummaryResponse, TextToSummary};
use crate::errors::SummaryError;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_summary_and_ctas", post(get_summary_and_ctas))
        .route("/get_summary_and_ctas_by_id", get(get_summary_and_ctas_by_id))
        .route("/async_get_summary_and_ctas", post(async_get_summary_and_ctas))
}

#[tracing::instrument(level = "info", skip_all)]
async fn get_summary_and_ctas(
    State(state): State<AppState>,
    payload: Result<Json<TextToSummary>, JsonRejection>,
) -> Result<Json<SummaryResponse>, SummaryError> {
    let service = state.service()?;
    let Json(body) = payload.map_err(helpers::json_rejection)?;
    let text = parsing::validate_text(&body.text_to_process, state.min_text_length())?;

    let summary = service.summarize(&text).await?;
    Ok(Json(summary))
}

#[tracing::instrument(level = "info", skip(state))]
async fn get_summary_and_ctas_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<SummaryResponse>, SummaryError> {
    let service = state.service()?;
    let Some(id) = query.id.filter(|id| !id.trim().is_empty()) else {
        return Err(SummaryError::Validation(
            "Query parameter 'id' is required".to_string(),
        ));
    };

    service.get_by_id(&id).map(Json)
}

#[tracing::instrument(level = "info", skip_all)]
async fn async_get_summary_and_ctas(
    State(state): State<AppState>,
    payload: Result<Json<Vec<TextToSummary>>, JsonRejection>,
) -> Result<Json<BatchResponse>, SummaryError> {
    let service = state.service()?;
    let Json(items) = payload.map_err(helpers::json_rejection)?;
    let texts = parsing::validate_batch(&items, state.min_text_length())?;

    Ok(Json(service.summarize_batch(texts).await))
}
