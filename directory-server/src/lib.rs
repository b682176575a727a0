//! Staff Directory Server - cookie-gated internal employee directory
//!
//! # Architecture overview
//!
//! This crate is the server entry point, providing:
//!
//! - **Authentication** (`auth`): JWT session cookies + Argon2 password hashing
//! - **Request gate** (`auth::middleware`): path-classifying middleware in
//!   front of every route
//! - **Database** (`db`): embedded SQLite storage via sqlx
//! - **HTTP API** (`api`): login/logout/me plus employee CRUD
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # config, state, server, errors
//! ├── auth/          # JWT, cookies, password hashing, request gate
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool setup and repositories
//! ├── services/      # provisioning (seed, admin management)
//! └── utils/         # logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{AppState, Config, Server};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - takes plain expression values
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Prepare the process environment: .env file, then logging.
///
/// A missing .env is fine; a malformed one is an error.
pub fn setup_environment() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(anyhow::anyhow!("Failed to load .env: {e}"));
    }

    let log_dir = std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty());
    utils::logger::init_logger_with_file(utils::logger::DEFAULT_LOG_FILTER, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __        ________
  / ___// /_____ _/ __/ __/
  \__ \/ __/ __ `/ /_/ /_
 ___/ / /_/ /_/ / __/ __/
/____/\__/\__,_/_/ /_/
    ____  _
   / __ \(_)____
  / / / / / ___/
 / /_/ / / /
/_____/_/_/
    "#
    );
}
