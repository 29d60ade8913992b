use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::database::models::{Account, AccountStatus, OidcConfig};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    #[error("Administrator must not be empty")]
    EmptyAdministrator,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Row shape for the accounts table; oidc_config comes back as JSONB and
/// status as its stored text form.
#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    domain: String,
    status: String,
    administrator: String,
    oidc_config: Json<OidcConfig>,
    created_by: String,
    created_on: DateTime<Utc>,
    modified_by: String,
    modified_on: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        // Unreachable for rows this service wrote (CHECK constraint), but the
        // mapping stays total rather than panicking on a foreign row.
        let status = row.status.parse().map_err(AccountError::InvalidStatus)?;

        Ok(Account {
            id: row.id,
            name: row.name,
            domain: row.domain,
            status,
            administrator: row.administrator,
            oidc_config: row.oidc_config.0,
            created_by: row.created_by,
            created_on: row.created_on,
            modified_by: row.modified_by,
            modified_on: row.modified_on,
        })
    }
}

/// Account operations: create/read plus the two single-field updates.
#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new account with a generated id and status `active`.
    ///
    /// The administrator is recorded as created_by/modified_by, and both
    /// audit timestamps carry the same captured instant.
    pub async fn create_account(
        &self,
        name: &str,
        domain: &str,
        oidc_config: OidcConfig,
        administrator: &str,
    ) -> Result<Account, AccountError> {
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            name: name.to_string(),
            domain: domain.to_string(),
            status: AccountStatus::Active,
            administrator: administrator.to_string(),
            oidc_config,
            created_by: administrator.to_string(),
            created_on: now,
            modified_by: administrator.to_string(),
            modified_on: now,
        };

        sqlx::query(
            r#"
            INSERT INTO accounts (
                id, name, domain, status, administrator,
                oidc_config, created_by, created_on, modified_by, modified_on
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.domain)
        .bind(account.status.as_str())
        .bind(&account.administrator)
        .bind(Json(&account.oidc_config))
        .bind(&account.created_by)
        .bind(account.created_on)
        .bind(&account.modified_by)
        .bind(account.modified_on)
        .execute(&self.pool)
        .await?;

        info!("Created account {} ({})", account.id, account.name);
        Ok(account)
    }

    /// Fetch an account by id. A missing row is NotFound, distinct from any
    /// underlying database failure.
    pub async fn get_account(&self, id: Uuid) -> Result<Account, AccountError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, name, domain, status, administrator,
                   oidc_config, created_by, created_on, modified_by, modified_on
            FROM accounts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(AccountError::NotFound(id))?.try_into()
    }

    /// Update the account status and refresh modified_on.
    ///
    /// modified_by is left untouched; the acting administrator is not
    /// tracked on this path. An id with no matching row affects zero rows
    /// and still reports success.
    pub async fn update_status(&self, id: Uuid, status: AccountStatus) -> Result<(), AccountError> {
        sqlx::query("UPDATE accounts SET status = $1, modified_on = NOW() WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Updated account {} status to {}", id, status);
        Ok(())
    }

    /// Update the account administrator and refresh modified_on.
    pub async fn update_administrator(
        &self,
        id: Uuid,
        administrator: &str,
    ) -> Result<(), AccountError> {
        if administrator.is_empty() {
            return Err(AccountError::EmptyAdministrator);
        }

        sqlx::query("UPDATE accounts SET administrator = $1, modified_on = NOW() WHERE id = $2")
            .bind(administrator)
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Updated account {} administrator", id);
        Ok(())
    }
}
