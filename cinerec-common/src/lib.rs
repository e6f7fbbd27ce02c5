//! # cinerec common library
//!
//! Shared code for the cinerec workspace:
//! - Error type used across crates
//! - Bootstrap configuration loading and priority resolution
//! - Timing helpers for elapsed-time instrumentation
//! - Counting allocator for per-call heap accounting

pub mod alloc;
pub mod config;
pub mod error;
pub mod timing;

pub use error::{Error, Result};
pub use timing::Timed;
