// ABOUTME: HTTP server startup
// ABOUTME: Opens the database, builds the router with CORS, and serves until Ctrl+C

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use vendorworld_api::{create_router, DbState};
use vendorworld_storage::connect;

/// Router with the CORS policy from `config` applied
pub fn build_app(state: DbState, config: &Config) -> anyhow::Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS_ORIGIN '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Ok(create_router(state).layer(cors))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let pool = connect(&config.database)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.path.display()))?;

    let app = build_app(DbState::new(pool), &config)?;

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
