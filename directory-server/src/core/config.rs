//! Server configuration

use crate::core::{Result, ServerError};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | DATABASE_URL | staff_directory.db | SQLite database path |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | dev fallback (logged) | session token signing secret |
/// | LOG_DIR | unset | daily-rolling log file directory |
///
/// Outside development the process refuses to start without `JWT_SECRET`.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (a leading `sqlite:` scheme is accepted)
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Session token signing secret
    pub jwt_secret: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty outside development.
    fn require_secret(name: &str, environment: &str) -> Result<String> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(ServerError::Config(format!(
                        "{name} must be set in {environment} environment"
                    )));
                }
                tracing::warn!(
                    "{name} not set, using a development fallback that is not suitable for production"
                );
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(ServerError::Config(format!(
                "{name} must not be empty in {environment} environment"
            )));
        }
        Ok(val)
    }

    /// Resolve the SQLite database path from `DATABASE_URL`
    ///
    /// Accepts a bare path or a `sqlite:` URL; defaults to
    /// `staff_directory.db` in the working directory.
    pub fn database_path_from_env() -> String {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "staff_directory.db".into());
        database_url
            .strip_prefix("sqlite:")
            .map(str::to_string)
            .unwrap_or(database_url)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: Self::database_path_from_env(),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// Build a config with explicit values, bypassing the environment
    ///
    /// Used by tests and tooling.
    pub fn with_overrides(
        database_url: impl Into<String>,
        http_port: u16,
        jwt_secret: impl Into<String>,
    ) -> Self {
        Self {
            database_url: database_url.into(),
            http_port,
            environment: "development".into(),
            jwt_secret: jwt_secret.into(),
            log_dir: None,
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
