use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::database::models::Account;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /v3/accounts/:id - fetch a single account; 404 when no row matches
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Account>, ApiError> {
    let account = state.accounts.get_account(id).await?;
    Ok(Json(account))
}
