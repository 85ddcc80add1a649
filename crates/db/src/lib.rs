//! Persistence for users, notes and share relations.
//!
//! - [`repositories`] -- PostgreSQL queries, one repo per table.
//! - [`store`] -- the identity / note / share contracts the access layer depends on.
//! - [`pg`] and [`memory`] -- PostgreSQL-backed and in-memory implementations.
//! - [`access`] -- caller-scoped note operations built on the contracts.

use sqlx::postgres::PgPoolOptions;

pub mod access;
pub mod memory;
pub mod models;
pub mod pg;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
