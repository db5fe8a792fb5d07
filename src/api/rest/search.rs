//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    #[serde(default)]
    pub q: String,
    /// Maximum number of results (default: 10, max: 100)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// GET /api/search - Entries ranked by lexical score
///
/// Only entries with a positive score are returned. `total` counts every
/// matching entry before the limit is applied.
pub async fn search_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    if params.q.trim().is_empty() {
        return Err(ApiError::bad_request("Query parameter 'q' is required"));
    }

    let snapshot = state.kb.snapshot();
    let mut ranked = snapshot.search(&params.q, None);
    let total = ranked.len();
    ranked.truncate(params.limit.clamp(1, 100));

    Ok(Json(ApiResponse::with_total(ranked, snapshot.revision(), total)))
}
