//! PostgreSQL persistence for the Brainstudio console.
//!
//! Row models, query repositories, and [`PgConsoleStore`], the
//! [`brainstudio_core::store::ConsoleStore`] implementation the API serves
//! from.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::PgConsoleStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Wrap `pool` as a shareable store trait object.
pub fn console_store(pool: DbPool) -> Arc<dyn brainstudio_core::store::ConsoleStore> {
    Arc::new(PgConsoleStore::new(pool))
}
