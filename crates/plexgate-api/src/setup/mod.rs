//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod upstream;

use crate::state::AppState;
use anyhow::{Context, Result};
use plexgate_core::Config;
use plexgate_db::PartCatalog;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    // Open the catalog
    let pool = database::setup_catalog_pool(&config).await?;

    // Build the storage signer
    let signer = storage::setup_signer(&config)?;

    // Build the shared client for the relay path
    let upstream = upstream::setup_upstream_client(&config)?;

    let state = Arc::new(AppState {
        catalog: PartCatalog::new(pool),
        signer,
        upstream,
        config: config.clone(),
    });

    // Setup routes
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
