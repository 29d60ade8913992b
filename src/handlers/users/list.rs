use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /v3/accounts/:id/users - list the account's users (empty list when
/// the account has none, or does not exist)
pub async fn list(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_users(account_id).await?;
    Ok(Json(users))
}
