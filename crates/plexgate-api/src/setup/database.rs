//! Catalog database setup
//!
//! The Plex library database is owned and written by Plex; the gateway opens
//! it strictly read-only and only ever runs single-row lookups against it.

use anyhow::{Context, Result};
use plexgate_core::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;

/// Open a read-only connection pool over the Plex library database.
pub async fn setup_catalog_pool(config: &Config) -> Result<SqlitePool> {
    tracing::info!(path = %config.catalog_path, "Opening catalog database (read-only)");

    let options = SqliteConnectOptions::new()
        .filename(&config.catalog_path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect_with(options)
        .await
        .context("Failed to open the Plex library database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Catalog database connected"
    );

    Ok(pool)
}
