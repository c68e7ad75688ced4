//! Application builder: wires repositories, services and router into a server.

use axum::Router;
use tracing::{error, info};

use avalia_core::config::AppConfig;
use avalia_core::error::{AppError, ErrorKind};
use avalia_database::Repositories;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application over an existing repository set.
pub fn build_app(config: AppConfig, repos: Repositories) -> Router {
    build_router(AppState::new(config, repos))
}

/// Connects the configured backend and serves until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(environment = %config.environment, "Starting Avalia server...");

    let repos = Repositories::connect(&config.database).await?;
    info!(backend = repos.backend_name(), "Repositories ready");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(config, repos.clone());

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(%addr, "Avalia server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    repos.close().await;
    info!("Avalia server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
