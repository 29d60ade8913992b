use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Role;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct AddRoleRequest {
    pub name: String,
    pub permissions: Vec<String>,
}

/// POST /v3/accounts/:id/roles - add a role to an account
pub async fn create(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    body: Result<Json<AddRoleRequest>, JsonRejection>,
) -> Result<Json<Role>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.to_string()))?;

    let role = state
        .roles
        .add_role(account_id, &req.name, req.permissions)
        .await?;

    Ok(Json(role))
}
