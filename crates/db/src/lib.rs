//! Persistence layer for tracks: connection pool, health check, migrations,
//! models, and repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 20,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
///
/// The pool connects lazily: this only fails on a malformed URL, never on an
/// unreachable server. Use [`health_check`] to find out whether the database
/// actually answers.
pub fn create_pool(database_url: &str, settings: PoolSettings) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy(database_url)
}

/// Round-trip a trivial query to verify the database is reachable and the
/// credentials are accepted.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Startup connection check: authenticate, then migrate.
///
/// Failures are logged and reported through the return value but never
/// abort the caller; the pool stays open. Returns `true` when the database
/// is reachable and migrated. See [`wait_until_ready`] for retrying.
pub async fn verify_connection(pool: &DbPool) -> bool {
    if let Err(e) = health_check(pool).await {
        tracing::error!(error = %e, "Unable to connect to the database");
        return false;
    }
    tracing::info!("Connection has been established successfully.");

    match run_migrations(pool).await {
        Ok(()) => {
            tracing::info!("Database migrations applied");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to run database migrations");
            false
        }
    }
}

/// Repeat [`verify_connection`] every `interval` until it succeeds.
///
/// Meant to be spawned when the startup check fails, so the schema is
/// created once the database comes up.
pub async fn wait_until_ready(pool: DbPool, interval: Duration) {
    let mut attempt: u32 = 1;
    while !verify_connection(&pool).await {
        if pool.is_closed() {
            tracing::warn!("Pool closed before the database became ready");
            return;
        }
        tracing::warn!(attempt, retry_in_secs = interval.as_secs(), "Database not ready");
        attempt += 1;
        tokio::time::sleep(interval).await;
    }
    tracing::info!(attempt, "Database ready");
}
