//! Shared types for the staff directory service
//!
//! Common types used across crates including error types, response
//! structures, data models, and id/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
