use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Errors from pool construction
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the process-wide connection pool from DATABASE_URL.
///
/// The pool is constructed once at startup and handed to the services; a
/// missing or unparsable URL is a fatal startup error.
pub async fn connect(config: &AppConfig) -> Result<PgPool, PoolError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| PoolError::ConfigMissing("DATABASE_URL"))?;

    // Parse up front so a malformed URL fails before the first connect attempt
    url::Url::parse(&database_url).map_err(|_| PoolError::InvalidDatabaseUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect(&database_url)
        .await?;

    info!(
        "Created database pool (max_connections={})",
        config.database.max_connections
    );
    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
