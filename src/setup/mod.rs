//! Application setup and initialization
//!
//! Wires adapters into handler state from an [`AppConfig`] and serves the
//! router. Kept out of `main.rs` so tests can build the same app.

mod server;
mod services;
mod telemetry;

pub use server::start_server;
pub use services::{build_router, AppServices};
pub use telemetry::init_telemetry;

use anyhow::{Context, Result};
use axum::Router;

use crate::config::AppConfig;

/// Validates the configuration and builds the router.
pub fn initialize_app(config: &AppConfig) -> Result<Router> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let services = AppServices::from_config(config)?;
    tracing::info!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        default_logo = %config.branding.default_logo_path.display(),
        "Services initialized"
    );

    Ok(build_router(services, config))
}
