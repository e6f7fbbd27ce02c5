//! Load generator for the recommendation endpoint
//!
//! **Usage:**
//! ```bash
//! load-gen --host http://localhost:8081 --genre Drama --mode inefficient \
//!     --requests 500 --concurrency 20
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cinerec_rs::loadgen::{self, LoadGenConfig};

/// Concurrent load generator for GET /recommendations
#[derive(Parser, Debug)]
#[command(name = "load-gen")]
#[command(about = "Send concurrent recommendation requests and report latency")]
struct Args {
    /// Base URL of the service
    #[arg(long, default_value = "http://localhost:8081")]
    host: String,

    /// Genre to request
    #[arg(long, default_value = "Sci-Fi")]
    genre: String,

    /// Result limit per request
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    limit: i64,

    /// Strategy: "inefficient" or "optimized"
    #[arg(long, default_value = "optimized")]
    mode: String,

    /// Total number of requests
    #[arg(long, default_value = "100")]
    requests: usize,

    /// Maximum requests in flight
    #[arg(long, default_value = "10")]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = LoadGenConfig {
        host: args.host,
        genre: args.genre,
        limit: args.limit,
        mode: args.mode,
        requests: args.requests,
        concurrency: args.concurrency,
    };

    info!(
        "host {} genre {} mode {} requests {} concurrency {} limit {}",
        config.host, config.genre, config.mode, config.requests, config.concurrency, config.limit
    );

    let client = reqwest::Client::new();
    let outcomes = loadgen::run(&client, &config)
        .await
        .context("Load run failed")?;
    let summary = loadgen::summarize(&outcomes);

    println!("successful {} / {}", summary.successful, summary.total);
    println!(
        "avg_ms {:.0} p50 {:.0} p95 {:.0}",
        summary.avg_ms, summary.p50_ms, summary.p95_ms
    );

    Ok(())
}
