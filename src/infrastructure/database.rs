//! Connection pool setup and schema bootstrap.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Embedded migrations from `./migrations`.
///
/// The initial migration uses `CREATE TABLE IF NOT EXISTS`, so running it
/// against a database that already holds a `links` table adopts that table.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a PostgreSQL pool sized and timed from `config`.
///
/// # Errors
///
/// Returns an error if the initial connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Brings the schema up to date.
///
/// Runs once at process start, before any request is served.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database schema is up to date");
    Ok(())
}
