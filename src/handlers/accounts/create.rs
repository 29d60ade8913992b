use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::database::models::{Account, OidcConfig};
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub domain: String,
    pub oidc_config: OidcConfig,
    pub administrator: String,
}

/// POST /v3/accounts - create a new account
///
/// The account comes back with a generated id, status `active`, and audit
/// fields stamped from the administrator.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<Account>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.to_string()))?;

    let account = state
        .accounts
        .create_account(&req.name, &req.domain, req.oidc_config, &req.administrator)
        .await?;

    Ok(Json(account))
}
