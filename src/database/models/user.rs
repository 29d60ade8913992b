use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Person record scoped to an account.
///
/// The roles are free-text labels stored as an ordered JSONB blob; they are
/// not validated against the Role entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unique_id: String,
    pub roles: Vec<String>,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
    pub modified_by: String,
    pub modified_on: DateTime<Utc>,
}
