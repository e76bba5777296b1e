use axum::Router;
use std::net::SocketAddr;
use tracing::info;

mod api;
mod config;
mod models;
mod services;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first; the logging filter comes from it
    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Initialize logging (RUST_LOG reaches config.logging.level as an override)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        "Starting server on {} (data root pattern: {})",
        config.server_address(),
        config.data.root_pattern
    );

    // Create router with state
    let addr: SocketAddr = config.server_address().parse()?;
    let app: Router = api::routes::create_router_with_state(config);

    // Start server
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
