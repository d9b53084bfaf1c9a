use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Initialize database connection pool from environment variables and apply
/// pending migrations.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
/// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails, or a migration
/// cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);
    let acquire_timeout_secs = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS);

    let config = DatabaseConfig::new(db_url, max_connections, acquire_timeout_secs);
    let pool = create_postgres_pool(&config).await?;

    let migrations_path = env::var("MIGRATIONS_PATH")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;

    Ok(pool)
}
