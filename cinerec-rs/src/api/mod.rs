//! HTTP API handlers for cinerec-rs

pub mod error;
pub mod health;
pub mod profiling;
pub mod recommendations;

pub use error::{ApiError, ApiResult};
pub use health::health_routes;
pub use profiling::{get_profiling_report, reset_profiling};
pub use recommendations::get_recommendations;
