//! Serve command - binds the token server and runs until shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::api::{create_app, AppState};
use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Run the token server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = AppConfig::load()?.with_overrides(&args.overrides()?);
    init_logging(&config.logging);

    let addr = build_socket_addr(&config)?;
    info!(
        event = "ack_startup",
        ip = %config.server.host,
        port = config.server.port,
        expiration_minutes = config.token.expiration_minutes,
        "Starting token server"
    );

    let state = AppState::from_config(Arc::new(config.token_config()));
    let app = create_app(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Token server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
