//! Data-access layer for charity events.
//!
//! - [`create_pool`] / [`health_check`] / [`run_migrations`]: connection provider
//! - [`query`]: parameterized statement composition for filtered listings
//! - [`normalize`]: raw row to API shape coercion
//! - [`repositories`]: one zero-sized repo per table

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod normalize;
pub mod query;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// How long a request may wait for a free connection before failing
    /// with [`sqlx::Error::PoolTimedOut`].
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
///
/// Connects eagerly, so an unreachable database is reported here rather
/// than on the first request.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
