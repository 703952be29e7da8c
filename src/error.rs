//! Error types for ninety.

use thiserror::Error;

/// Errors that can occur while running ninety.
#[derive(Error, Debug)]
pub enum NinetyError {
    /// Configuration file could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
