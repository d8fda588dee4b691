//! `/extras` routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::AppState;
use crate::errors::SummaryError;

pub fn router() -> Router<AppState> {
    Router::new().route("/get_summaries_ids", get(get_summaries_ids))
}

/// Identifiers of every summary generated since process start.
async fn get_summaries_ids(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, SummaryError> {
    Ok(Json(state.service()?.list_ids()))
}
