//! HTTP server initialization and runtime setup.
//!
//! Builds the short-link registry, wires it into the router and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::{RegistrySettings, ShortLinkRegistry};
use crate::routes::{app, reserved_codes};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory short-link registry (empty)
/// - Axum HTTP server with graceful shutdown
///
/// The registry is dropped when the server stops; nothing is persisted.
///
/// # Errors
///
/// Returns an error if:
/// - Registry settings are rejected
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let settings = RegistrySettings {
        code_length: config.code_length,
        max_attempts: config.max_generation_attempts,
        reserved: reserved_codes(),
        ..RegistrySettings::default()
    };

    let registry =
        ShortLinkRegistry::new(settings).context("Failed to initialize short-link registry")?;
    tracing::info!(
        "Short-link registry ready (code length {}, {} possible codes)",
        registry.code_length(),
        registry.capacity()
    );

    let state = AppState::new(Arc::new(registry), config.public_base_url.clone());
    let service = app(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Starting URL shortener service on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
