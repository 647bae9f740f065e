use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the ADE risk engine service
///
/// Loads `.env`, installs logging, resolves configuration once, and serves the REST API.
///
/// # Environment Variables
/// - `ADE_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `ADE_RACE_ADJUSTMENT`: keep the race-based AKI weight (default: "true")
/// - `RUST_LOG`: extra tracing directives
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ade_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("ade_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("ADE_REST_ADDR")
        .unwrap_or_else(|_| api_rest::DEFAULT_REST_ADDR.into())
        .parse()?;

    let cfg: Arc<ade_core::CoreConfig> = Arc::new(api_rest::core_config_from_env()?);
    tracing::info!(
        race_adjustment = cfg.scoring_policy().race_adjustment,
        "++ Starting ADE REST on {}",
        rest_addr
    );

    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, api_rest::router(cfg))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ADE REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
