//! Products API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = api::app(&state).await?;

    info!(
        "Starting Products API on port {} ({} seeded products, GET by id answers {})",
        state.config.server.port,
        state.config.products.seed_count,
        state.config.products.find_one_status.as_u16()
    );

    create_production_app(app, &state.config.server, async {
        info!("Shutting down: nothing to release for the in-memory store");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
