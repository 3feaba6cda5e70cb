use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use gatekeeper::logging::init_tracing;
use gatekeeper::router::init_router;
use gatekeeper::state::init_app_state;
use gatekeeper_config::{JwtConfig, LoggingConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let logging_config = LoggingConfig::from_env().context("invalid logging configuration")?;
    let _log_guard = init_tracing(&logging_config);

    // A missing or empty signing key aborts startup here, before any request is served.
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let server_config = ServerConfig::from_env().context("invalid server configuration")?;

    let state = init_app_state(&jwt_config, &server_config)
        .await
        .context("failed to initialize user repository")?;
    let app = init_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "Server running");
    info!("OpenAPI document at http://localhost:{}/api-docs/openapi.json", server_config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
