use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::SYSTEM_ACTOR;
use crate::database::models::User;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, FromRow)]
struct UserRow {
    user_id: Uuid,
    account_id: Uuid,
    name: String,
    email: String,
    phone: String,
    unique_id: String,
    roles: Json<Vec<String>>,
    created_by: String,
    created_on: DateTime<Utc>,
    modified_by: String,
    modified_on: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            user_id: row.user_id,
            account_id: row.account_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            unique_id: row.unique_id,
            roles: row.roles.0,
            created_by: row.created_by,
            created_on: row.created_on,
            modified_by: row.modified_by,
            modified_on: row.modified_on,
        }
    }
}

/// User operations scoped to an account.
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a user to an account.
    ///
    /// An account_id that references no account surfaces as the raw
    /// foreign-key violation from the database, not a distinguished
    /// not-found error.
    pub async fn add_user(
        &self,
        account_id: Uuid,
        name: &str,
        email: &str,
        phone: &str,
        unique_id: &str,
        roles: Vec<String>,
    ) -> Result<User, UserError> {
        let now = Utc::now();
        let user = User {
            user_id: Uuid::new_v4(),
            account_id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            unique_id: unique_id.to_string(),
            roles,
            created_by: SYSTEM_ACTOR.to_string(),
            created_on: now,
            modified_by: SYSTEM_ACTOR.to_string(),
            modified_on: now,
        };

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id, account_id, name, email, phone, unique_id,
                roles, created_by, created_on, modified_by, modified_on
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.user_id)
        .bind(user.account_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.unique_id)
        .bind(Json(&user.roles))
        .bind(&user.created_by)
        .bind(user.created_on)
        .bind(&user.modified_by)
        .bind(user.modified_on)
        .execute(&self.pool)
        .await?;

        info!("Added user {} to account {}", user.user_id, account_id);
        Ok(user)
    }

    /// List all users of an account, in no guaranteed order. An unknown
    /// account yields an empty list, same as an account with no users.
    pub async fn list_users(&self, account_id: Uuid) -> Result<Vec<User>, UserError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT user_id, account_id, name, email, phone, unique_id, roles,
                   created_by, created_on, modified_by, modified_on
            FROM users WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
