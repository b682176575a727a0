//! Utility module
//!
//! - [`AppError`] / [`ApiResponse`] re-exported from `shared::error`
//! - Logging setup
//! - Input validation helpers

pub mod logger;
pub mod validation;

// Re-export error types from shared so handlers can use crate::utils::AppError
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
