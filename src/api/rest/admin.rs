//! Admin session endpoints

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use super::knowledge::require_admin;
use super::ApiError;
use crate::api::auth::AuthError;
use crate::api::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub password: String,
}

/// GET /api/admin - Check the caller's admin standing
pub async fn status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let session = require_admin(&headers, &state)?;
    Ok(Json(json!({
        "status": "ok",
        "language": session.language,
    })))
}

/// POST /api/admin/token - Exchange the admin password for a token
pub async fn issue_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(auth) = &state.auth else {
        return Err(ApiError::bad_request("admin authentication is not configured"));
    };

    match auth.login(&req.password) {
        Ok(token) => Ok(Json(token)),
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("admin login with wrong password");
            Err(ApiError::unauthorized("invalid password"))
        }
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}
