//! Knowledge-base document endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::{ApiError, ApiResponse, PaginationParams};
use crate::api::session::Session;
use crate::api::state::AppState;
use crate::types::Entry;

/// Result of a document replacement or removal
#[derive(Debug, Serialize)]
pub struct UpdateResult {
    pub entries: usize,
    pub revision: u64,
}

/// GET /api/knowledge - List entries with pagination
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> impl IntoResponse {
    let snapshot = state.kb.snapshot();
    let limit = params.normalized_limit();

    let entries: Vec<Entry> = snapshot
        .entries()
        .iter()
        .skip(params.offset)
        .take(limit)
        .cloned()
        .collect();

    Json(ApiResponse::with_total(entries, snapshot.revision(), snapshot.len()))
}

/// PUT /api/knowledge - Replace the document with the raw request body
pub async fn replace_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &state)?;

    let snapshot = state.kb.load_document(body)?;
    Ok(Json(UpdateResult {
        entries: snapshot.len(),
        revision: snapshot.revision(),
    }))
}

/// DELETE /api/knowledge - Remove the document
pub async fn clear_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &state)?;

    let snapshot = state.kb.clear()?;
    Ok(Json(UpdateResult {
        entries: 0,
        revision: snapshot.revision(),
    }))
}

pub(super) fn require_admin(headers: &HeaderMap, state: &AppState) -> Result<Session, ApiError> {
    let session = Session::from_headers(headers, state);
    if session.is_admin() {
        Ok(session)
    } else {
        Err(ApiError::unauthorized("admin token required"))
    }
}
