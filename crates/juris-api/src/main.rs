//! # juris-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the audit engine.
//! Binds to configurable port (default 8080).

use juris_api::state::{AppConfig, AppState, LogFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build configuration from environment.
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    let port = config.port;
    let state = AppState::with_config(config).map_err(|e| {
        tracing::error!("FX provider initialization failed: {e}");
        e
    })?;
    tracing::info!(
        jurisdictions = state.engine.registry().iter().count(),
        fx_source = state.engine.fx().source_name(),
        "audit engine ready"
    );

    let app = juris_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("juris API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
