//! Serve command - runs the prediction API and form on one port

use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::api::create_app_router;
use crate::config::AppConfig;
use crate::infrastructure::observability::init_metrics;

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let state = crate::create_app_state_with_config(&config);
    let metrics = init_metrics(&config.metrics);
    let app = create_app_router(state, metrics, Path::new(&config.server.static_dir));

    let addr = build_socket_addr(&config)?;
    info!(
        model = %config.model.path,
        static_dir = %config.server.static_dir,
        load_policy = ?config.model.load_policy,
        "Starting server on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
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
