//! Recommendation endpoint
//!
//! `GET /recommendations?genre=<string>&limit=<int>&mode=<inefficient|optimized>`

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ApiError, ApiResult};
use crate::movie::Movie;
use crate::recommender::Mode;
use crate::AppState;

/// Limit applied when `limit` is absent or not an integer
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw query parameters
///
/// `limit` and `mode` are taken as strings so that malformed values fall back
/// to defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub genre: Option<String>,
    pub limit: Option<String>,
    pub mode: Option<String>,
}

/// Response body
///
/// `result` borrows straight from the shared catalog.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse<'a> {
    pub genre: &'a str,
    pub limit: i64,
    pub mode: &'a str,
    pub result: Vec<&'a Movie>,
    pub response_time_ms: f64,
    /// Heap allocated by the strategy while serving this request
    pub allocated_mb: f64,
    pub count: usize,
}

/// Effective limit for a raw `limit` value
pub fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

/// GET /recommendations
///
/// Dispatches to the strategy named by `mode`, records the elapsed time and
/// allocation in the profiling ledger and echoes the request parameters back with the result.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> ApiResult<Response> {
    let genre = query
        .genre
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("Required parameter 'genre' is missing".to_string()))?;
    let limit = parse_limit(query.limit.as_deref());
    let mode_param = query.mode.as_deref().unwrap_or(Mode::default().as_str());
    let mode = Mode::from_param(Some(mode_param));

    debug!(
        "Recommendations requested: genre={}, limit={}, mode={} ({})",
        genre,
        limit,
        mode_param,
        mode.as_str()
    );

    let timed = mode
        .recommender()
        .recommend_timed(&state.catalog, genre, limit);
    let elapsed_ms = timed.elapsed_ms();
    let allocated_mb = timed.allocated_mb();

    state
        .profiling
        .write()
        .await
        .record(mode, elapsed_ms, allocated_mb);

    let count = timed.value.len();
    let body = RecommendationResponse {
        genre,
        limit,
        mode: mode_param,
        result: timed.value,
        response_time_ms: elapsed_ms,
        allocated_mb,
        count,
    };

    // Serialize while the catalog borrow is still alive
    Ok(Json(body).into_response())
}
