use axum_helpers::server::{create_app, create_router, health_router};
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
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from the JSON file at $CONFIG_PATH (default: config.json)
    let config = Config::load()?;

    init_tracing(&config.environment);

    // Connection failure is fatal; there is no retry
    let db = database::sql::connect_from_config(config.database.clone()).await?;

    let state = AppState { config, db };

    // API routes under /api/v1, health endpoints at the root, all traced
    let api_routes = api::routes(&state);
    let health_routes = health_router(
        state.config.server.app_name.clone(),
        env!("CARGO_PKG_VERSION"),
    )
    .merge(api::health::router(state.clone()));
    let app = create_router::<openapi::ApiDoc>("/api/v1", api_routes, health_routes);

    info!("Starting {}", state.config.server.app_name);

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connections");
    state.db.close().await?;

    info!("{} shutdown complete", state.config.server.app_name);
    Ok(())
}
