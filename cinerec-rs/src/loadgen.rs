//! HTTP load generator for `/recommendations`
//!
//! Fires a fixed number of requests with bounded concurrency and summarizes
//! the observed latencies. Used by the `load-gen` binary.

use std::time::{Duration, Instant};

use cinerec_common::timing::duration_to_ms;
use cinerec_common::{Error, Result};
use futures::stream::{self, StreamExt};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

/// Load run parameters
#[derive(Debug, Clone)]
pub struct LoadGenConfig {
    /// Base URL of the service, e.g. `http://localhost:8081`
    pub host: String,
    pub genre: String,
    pub limit: i64,
    pub mode: String,
    /// Total number of requests to send
    pub requests: usize,
    /// Maximum number of requests in flight
    pub concurrency: usize,
}

impl Default for LoadGenConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8081".to_string(),
            genre: "Sci-Fi".to_string(),
            limit: 5,
            mode: "optimized".to_string(),
            requests: 100,
            concurrency: 10,
        }
    }
}

impl LoadGenConfig {
    /// Target URL with query parameters encoded
    pub fn recommendations_url(&self) -> Result<Url> {
        let base = format!("{}/recommendations", self.host.trim_end_matches('/'));
        let limit = self.limit.to_string();
        Url::parse_with_params(
            &base,
            &[
                ("genre", self.genre.as_str()),
                ("limit", limit.as_str()),
                ("mode", self.mode.as_str()),
            ],
        )
        .map_err(|e| Error::InvalidInput(format!("Invalid host '{}': {}", self.host, e)))
    }
}

/// Outcome of a single request
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    pub ok: bool,
    /// HTTP status, 0 when no response arrived
    pub status: u16,
    pub latency: Duration,
    /// Length of `result` in the response body
    pub count: usize,
}

/// Aggregate view of a run
#[derive(Debug, Clone, PartialEq)]
pub struct LatencySummary {
    pub successful: usize,
    pub total: usize,
    pub avg_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
}

/// Element `floor(len * p)` of an ascending list, 0 if out of range
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted.get(index).copied().unwrap_or(0.0)
}

/// Summarize outcomes; failed requests still count towards latency
pub fn summarize(outcomes: &[RequestOutcome]) -> LatencySummary {
    let mut latencies: Vec<f64> = outcomes.iter().map(|o| duration_to_ms(o.latency)).collect();
    latencies.sort_by(|a, b| a.total_cmp(b));

    let avg_ms = if latencies.is_empty() {
        0.0
    } else {
        latencies.iter().sum::<f64>() / latencies.len() as f64
    };

    LatencySummary {
        successful: outcomes.iter().filter(|o| o.ok).count(),
        total: outcomes.len(),
        avg_ms,
        p50_ms: percentile(&latencies, 0.5),
        p95_ms: percentile(&latencies, 0.95),
    }
}

/// Send `config.requests` requests with at most `config.concurrency` in flight
pub async fn run(client: &reqwest::Client, config: &LoadGenConfig) -> Result<Vec<RequestOutcome>> {
    if config.concurrency == 0 {
        return Err(Error::InvalidInput("concurrency must be at least 1".to_string()));
    }

    let url = config.recommendations_url()?;
    debug!("Load target: {}", url);

    let outcomes: Vec<RequestOutcome> = stream::iter(0..config.requests)
        .map(|_| single(client, url.clone()))
        .buffer_unordered(config.concurrency)
        .collect()
        .await;

    Ok(outcomes)
}

async fn single(client: &reqwest::Client, url: Url) -> RequestOutcome {
    let start = Instant::now();

    match client.get(url).send().await {
        Ok(response) => {
            // Latency covers the response head only, not the body download
            let latency = start.elapsed();
            let status = response.status();
            let body = response.json::<Value>().await;

            let count = body
                .as_ref()
                .ok()
                .and_then(|v| v.get("result"))
                .and_then(Value::as_array)
                .map_or(0, Vec::len);

            RequestOutcome {
                ok: status.is_success(),
                status: status.as_u16(),
                latency,
                count,
            }
        }
        Err(e) => {
            debug!("Request failed: {}", e);
            RequestOutcome {
                ok: false,
                status: 0,
                latency: start.elapsed(),
                count: 0,
            }
        }
    }
}
