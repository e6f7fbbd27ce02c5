//! # cinerec recommendation service (cinerec-rs)
//!
//! Serves top-N-by-genre recommendations over a fixed in-memory catalog of 100
//! movies, through either a deliberately wasteful baseline strategy or a
//! single-pass optimized one, and keeps a per-strategy latency ledger so the
//! two can be compared.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;
pub mod cli;
pub mod loadgen;
pub mod movie;
pub mod profiling;
pub mod recommender;

use catalog::Catalog;
use profiling::ProfilingLedger;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog built once at startup, never mutated
    pub catalog: Arc<Catalog>,
    /// Latency aggregates per strategy
    pub profiling: Arc<RwLock<ProfilingLedger>>,
}

impl AppState {
    /// Create new application state around an already-built catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            profiling: Arc::new(RwLock::new(ProfilingLedger::new())),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommendations", get(api::get_recommendations))
        .route("/profiling-report", get(api::get_profiling_report))
        .route("/profiling-reset", post(api::reset_profiling))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The service answers browsers on any origin
        .layer(CorsLayer::permissive())
}
