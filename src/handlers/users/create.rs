use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unique_id: String,
    pub roles: Vec<String>,
}

/// POST /v3/accounts/:id/users - add a user to an account
///
/// An unknown account id fails the foreign-key constraint and surfaces as a
/// persistence error (500), not a 404.
pub async fn create(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    body: Result<Json<AddUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.to_string()))?;

    let user = state
        .users
        .add_user(
            account_id,
            &req.name,
            &req.email,
            &req.phone,
            &req.unique_id,
            req.roles,
        )
        .await?;

    Ok(Json(user))
}
