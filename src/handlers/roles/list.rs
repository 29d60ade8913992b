use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::database::models::Role;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /v3/accounts/:id/roles - list the account's roles (empty list when
/// the account has none, or does not exist)
pub async fn list(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<Role>>, ApiError> {
    let roles = state.roles.list_roles(account_id).await?;
    Ok(Json(roles))
}
