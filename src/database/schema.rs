use sqlx::PgPool;
use tracing::info;

// Initial schema. accounts is the root entity; users and roles hang off it
// with ON DELETE CASCADE. The oidc_config/roles/permissions columns hold
// opaque JSON blobs, not relations.
const CREATE_ACCOUNTS: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    domain TEXT NOT NULL,
    status TEXT NOT NULL CHECK (status IN ('active', 'closed')),
    administrator TEXT NOT NULL,
    oidc_config JSONB NOT NULL,
    created_by TEXT,
    created_on TIMESTAMPTZ,
    modified_by TEXT,
    modified_on TIMESTAMPTZ
)
"#;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id UUID PRIMARY KEY,
    account_id UUID REFERENCES accounts(id) ON DELETE CASCADE,
    name TEXT,
    email TEXT,
    phone TEXT,
    unique_id TEXT,
    roles JSONB,
    created_by TEXT,
    created_on TIMESTAMPTZ,
    modified_by TEXT,
    modified_on TIMESTAMPTZ
)
"#;

const CREATE_ROLES: &str = r#"
CREATE TABLE IF NOT EXISTS roles (
    role_id UUID PRIMARY KEY,
    account_id UUID REFERENCES accounts(id) ON DELETE CASCADE,
    name TEXT,
    permissions JSONB,
    created_by TEXT,
    created_on TIMESTAMPTZ,
    modified_by TEXT,
    modified_on TIMESTAMPTZ
)
"#;

/// Create the three tables if they do not exist yet.
///
/// Statements run one at a time; sqlx prepares each query and prepared
/// statements are single-statement. Failure here is fatal at startup.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_ACCOUNTS, CREATE_USERS, CREATE_ROLES] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized");
    Ok(())
}
