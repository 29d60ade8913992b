use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::AccountStatus;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    // Typed as the enum, so anything outside active/closed fails decoding
    // before storage is touched.
    pub status: AccountStatus,
}

/// POST /v3/accounts/:id/status - set account status, 204 on success
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.to_string()))?;

    state.accounts.update_status(id, req.status).await?;

    Ok(StatusCode::NO_CONTENT)
}
