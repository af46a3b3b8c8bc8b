//! Bluegreen: a minimal blue-green deployment web service.
//!
//! This is the application entry point. It initializes tracing, reads
//! configuration from the process environment, sets up the Axum router,
//! and serves HTTP until externally terminated.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bluegreen::config::{AppConfig, DEFAULT_LOG_FILTER};
use bluegreen::routes::create_router;
use bluegreen::state::AppState;
use bluegreen::templates::init_templates;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize Tera templates
    let tera = init_templates()?;

    // Create application state
    let state = AppState::new(config.clone(), tera);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(port = config.port, version = %config.version, "App running");

    axum::serve(listener, app).await?;

    Ok(())
}
