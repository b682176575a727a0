//! Server-level errors
//!
//! Startup and configuration failures. Request-level errors use
//! `shared::error::AppError` instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for startup paths
pub type Result<T> = std::result::Result<T, ServerError>;
