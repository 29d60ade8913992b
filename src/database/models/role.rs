use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named permission bundle scoped to an account. Permissions are an ordered
/// sequence of strings stored as a JSONB blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub role_id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub permissions: Vec<String>,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
    pub modified_by: String,
    pub modified_on: DateTime<Utc>,
}
