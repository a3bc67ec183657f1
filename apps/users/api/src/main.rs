use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // One attempt; a database that is down at startup is fatal.
    let db = database::mysql::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("MySQL connection failed: {}", e))?;

    let state = AppState { config, db };

    // - /users/...: CRUD routes
    // - /health: liveness with app name/version
    // - /ready: readiness with a database round trip
    let app = api::app(&state);
    let AppState { config, db } = state;

    info!("Starting users API (30s shutdown timeout)");

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database pool");
            if let Err(e) = database::mysql::close(db).await {
                tracing::error!("Error closing MySQL pool: {}", e);
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
