//! Core module: configuration, state and server
//!
//! - [`Config`] - environment-driven configuration
//! - [`AppState`] - shared application state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::AppState;
