use axum_helpers::{
    cors_layer_from_config, create_router,
    server::{create_production_app, health_router},
};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{AccountService, InMemoryUserRepository};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let service = AccountService::new(InMemoryUserRepository::new());

    let cors_layer = cors_layer_from_config(&config.cors)?;
    let router = create_router::<openapi::ApiDoc>(api::routes(&service), cors_layer);

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the users store
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::ready_router(service));

    info!(
        environment = ?config.environment,
        "Starting {} v{} (shutdown timeout {:?})",
        config.app.name,
        config.app.version,
        config.server.shutdown_timeout
    );

    create_production_app(app, &config.server, async {
        // In-memory store: nothing to flush
        info!("Shutting down: releasing users store");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
