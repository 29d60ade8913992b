use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateAdministratorRequest {
    pub administrator: String,
}

/// POST /v3/accounts/:id/administrator - reassign the administrator, 204 on
/// success; an empty value is rejected with 400
pub async fn update_administrator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateAdministratorRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.to_string()))?;

    state
        .accounts
        .update_administrator(id, &req.administrator)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
