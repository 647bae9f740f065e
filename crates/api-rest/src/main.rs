//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, with OpenAPI/Swagger UI.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `ade-run` binary serves the same
//! router.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the ADE REST API server
///
/// # Environment Variables
/// - `ADE_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `ADE_RACE_ADJUSTMENT`: keep the race-based AKI weight (default: "true")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("ADE_REST_ADDR").unwrap_or_else(|_| api_rest::DEFAULT_REST_ADDR.into());
    let cfg = Arc::new(api_rest::core_config_from_env()?);

    tracing::info!("-- Starting ADE REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, api_rest::router(cfg)).await?;

    Ok(())
}
