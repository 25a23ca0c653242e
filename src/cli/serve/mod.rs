//! Serve command - runs the HTTP API server

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::create_router_with_state;
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Arguments for the serve command
#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Upstream directory base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Run the API server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();

    if let Some(base_url) = args.base_url {
        config.directory.base_url = base_url;
    }

    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;
    let mut app = create_router_with_state(state);

    if let Some(metrics) = init_metrics(&config.metrics) {
        app = app.merge(create_metrics_router(metrics, &config.metrics.path));
    }

    let addr = build_socket_addr(&config, args.port)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server shutdown complete");

    Ok(())
}

fn build_socket_addr(config: &AppConfig, port: Option<u16>) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        port.unwrap_or(config.server.port),
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr_uses_config_port() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config, None).unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_build_socket_addr_port_override() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config, Some(3001)).unwrap();
        assert_eq!(addr.port(), 3001);
    }

    #[test]
    fn test_build_socket_addr_rejects_bad_host() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(build_socket_addr(&config, None).is_err());
    }
}
