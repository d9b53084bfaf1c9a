use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Pool settings for the storefront database. The caller decides where the
/// values come from; the presentation layer reads them from the environment.
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String, max_connections: u32, acquire_timeout_secs: u64) -> Self {
        Self {
            connection_string,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        }
    }
}

/// Opens the Postgres pool shared by every repository adapter.
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Applies pending migrations from the given directory.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}
