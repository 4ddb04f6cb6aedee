//! Portal API Server Binary
//!
//! Starts the read-only HTTP API over the claim lifecycle model.
//!
//! # Usage
//!
//! ```bash
//! # Serve the bundled demo portfolio
//! cargo run --bin portal-api
//!
//! # Serve a fixture file on another port
//! PORTAL_PORT=9090 PORTAL_FIXTURE_PATH=./portal.json cargo run --bin portal-api
//! ```
//!
//! # Environment Variables
//!
//! * `PORTAL_HOST` - Server host (default: 0.0.0.0)
//! * `PORTAL_PORT` - Server port (default: 8080)
//! * `PORTAL_FIXTURE_PATH` - Fixture document to serve (default: bundled demo portfolio)
//! * `PORTAL_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claims::PortalDataPort;
use infra_fixtures::FixturePortalAdapter;
use interface_api::{config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid PORTAL_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting portal API server"
    );

    let adapter = match &config.fixture_path {
        Some(path) => FixturePortalAdapter::load_from_path(path)
            .await
            .with_context(|| format!("failed to load fixture {}", path.display()))?,
        None => FixturePortalAdapter::bundled().context("bundled fixture is invalid")?,
    };
    let port: Arc<dyn PortalDataPort> = Arc::new(adapter);

    let app = create_router(port, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Installs the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
