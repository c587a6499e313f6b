//! HTTP server initialization and runtime setup.
//!
//! Wires the file repositories and directory cache into the router and
//! runs the Axum server until shutdown.

use crate::config::Config;
use crate::infrastructure::cache::{DirectoryCache, MemoryDirectoryCache, NullDirectoryCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Directory cache (in-memory or disabled)
/// - File-backed report service
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The directory host suffix is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache: Arc<dyn DirectoryCache> = if config.directory_cache {
        tracing::info!("Directory cache enabled (memory)");
        Arc::new(MemoryDirectoryCache::new())
    } else {
        tracing::info!("Directory cache disabled (NullDirectoryCache)");
        Arc::new(NullDirectoryCache::new())
    };

    let state = AppState::new(config.report_sources(), config.directory_pattern()?, cache);

    if tokio::fs::metadata(&config.count_data_dir).await.is_err() {
        tracing::warn!(
            "Count data directory {} is missing; reports will be empty until it appears",
            config.count_data_dir.display()
        );
    }

    let app = app_router(
        state,
        config.rate_limit_per_second,
        config.rate_limit_burst,
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
