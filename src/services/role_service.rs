use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::SYSTEM_ACTOR;
use crate::database::models::Role;

#[derive(Debug, Error)]
pub enum RoleError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, FromRow)]
struct RoleRow {
    role_id: Uuid,
    account_id: Uuid,
    name: String,
    permissions: Json<Vec<String>>,
    created_by: String,
    created_on: DateTime<Utc>,
    modified_by: String,
    modified_on: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            role_id: row.role_id,
            account_id: row.account_id,
            name: row.name,
            permissions: row.permissions.0,
            created_by: row.created_by,
            created_on: row.created_on,
            modified_by: row.modified_by,
            modified_on: row.modified_on,
        }
    }
}

/// Role operations scoped to an account. Same shape as the user component.
#[derive(Clone)]
pub struct RoleService {
    pool: PgPool,
}

impl RoleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a role to an account. A missing account surfaces as the raw
    /// foreign-key violation.
    pub async fn add_role(
        &self,
        account_id: Uuid,
        name: &str,
        permissions: Vec<String>,
    ) -> Result<Role, RoleError> {
        let now = Utc::now();
        let role = Role {
            role_id: Uuid::new_v4(),
            account_id,
            name: name.to_string(),
            permissions,
            created_by: SYSTEM_ACTOR.to_string(),
            created_on: now,
            modified_by: SYSTEM_ACTOR.to_string(),
            modified_on: now,
        };

        sqlx::query(
            r#"
            INSERT INTO roles (
                role_id, account_id, name, permissions,
                created_by, created_on, modified_by, modified_on
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(role.role_id)
        .bind(role.account_id)
        .bind(&role.name)
        .bind(Json(&role.permissions))
        .bind(&role.created_by)
        .bind(role.created_on)
        .bind(&role.modified_by)
        .bind(role.modified_on)
        .execute(&self.pool)
        .await?;

        info!("Added role {} to account {}", role.role_id, account_id);
        Ok(role)
    }

    /// List all roles of an account, in no guaranteed order. An unknown
    /// account yields an empty list.
    pub async fn list_roles(&self, account_id: Uuid) -> Result<Vec<Role>, RoleError> {
        let rows: Vec<RoleRow> = sqlx::query_as(
            r#"
            SELECT role_id, account_id, name, permissions,
                   created_by, created_on, modified_by, modified_on
            FROM roles WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Role::from).collect())
    }
}
