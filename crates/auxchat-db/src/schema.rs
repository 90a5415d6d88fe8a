//! Schema bootstrap
//!
//! The schema is idempotent (`CREATE ... IF NOT EXISTS`) and applied on startup.

use sqlx::PgPool;
use tracing::info;

/// Complete schema
pub const SCHEMA: &str = include_str!("../migrations/0001_initial.sql");

/// Create all tables and indexes that do not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
