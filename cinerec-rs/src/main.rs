//! cinerec-rs - recommendation service entry point
//!
//! Startup order:
//! 1. parse CLI / environment
//! 2. load the TOML tier and resolve the final configuration
//! 3. initialize tracing at the resolved level
//! 4. build the catalog once and hand it to the router state
//! 5. serve until Ctrl+C / SIGTERM

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinerec_common::alloc::CountingAllocator;
use cinerec_common::config::{load_toml_config, ServiceConfig};
use cinerec_rs::catalog::Catalog;
use cinerec_rs::cli::Args;
use cinerec_rs::{build_router, AppState};

/// Per-thread allocation counts feed `allocated_mb` and the profiling report
#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (toml_config, source) = load_toml_config(args.config.as_deref(), "cinerec-rs")
        .context("Failed to load configuration")?;
    let config = ServiceConfig::resolve(args.overrides(), toml_config);

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cinerec_rs={0},tower_http={0}", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cinerec-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration from {}", source);

    let catalog = Catalog::standard();
    info!("Catalog initialized with {} movies", catalog.len());

    let app = build_router(AppState::new(catalog));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("cinerec-rs listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
