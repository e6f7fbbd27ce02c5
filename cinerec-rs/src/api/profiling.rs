//! Profiling report endpoints
//!
//! GET /profiling-report and POST /profiling-reset

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::profiling::ProfilingReport;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// GET /profiling-report
///
/// Per-strategy call counts and latency aggregates since startup or the last
/// reset.
pub async fn get_profiling_report(State(state): State<AppState>) -> Json<ProfilingReport> {
    let ledger = state.profiling.read().await;
    Json(ledger.report(Utc::now()))
}

/// POST /profiling-reset
pub async fn reset_profiling(State(state): State<AppState>) -> Json<StatusResponse> {
    state.profiling.write().await.reset();
    info!("Profiling data reset");

    Json(StatusResponse {
        status: "profiling data reset".to_string(),
    })
}
