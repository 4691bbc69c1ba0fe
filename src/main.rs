//! # CRUD API server
//!
//! Parses the configuration, starts the resource actors, optionally loads demo data and serves
//! the router until Ctrl-C, then shuts the actors down.

use clap::Parser;
use crud_api::config::Config;
use crud_api::http;
use crud_api::lifecycle::{seed_demo_data, ApiSystem};
use resource_actor::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();
    setup_tracing();

    info!(?config, "Starting API server");

    let system = ApiSystem::new(config.channel_capacity);

    if config.seed {
        seed_demo_data(&system).await.map_err(|e| e.to_string())?;
    }

    let app = http::router(&system, config.environment);
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| format!("Failed to bind {address}: {e}"))?;

    info!(%address, environment = %config.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
