use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;

/// Header carrying the shared admin password on mutating requests.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
}

/// Check the shared admin password.
///
/// There are no sessions: clients that pass the check replay the same
/// password in the `x-admin-password` header on mutating requests.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.password == state.config.admin.password {
        Ok(Json(LoginResponse { ok: true }))
    } else {
        Err(ApiError::Unauthorized("incorrect password".to_string()))
    }
}

/// Reject the request unless the admin password header matches the config.
pub fn require_admin(headers: &HeaderMap, state: &AppState) -> Result<(), ApiError> {
    let supplied = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(password) if password == state.config.admin.password => Ok(()),
        _ => Err(ApiError::Unauthorized(
            "admin password required".to_string(),
        )),
    }
}
