//! Common error types for cinerec

use thiserror::Error;

/// Common result type for cinerec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across cinerec crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or command-line parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
