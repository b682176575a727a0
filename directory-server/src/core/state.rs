//! Application State

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtConfig, JwtService};
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// Application state shared by all request handlers
///
/// Cloning is shallow: the pool and the JWT service are shared references.
/// The signing secret is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT session token service
    pub jwt: Arc<JwtService>,
}

impl AppState {
    /// Initialize state: open the database, run migrations, build services
    pub async fn new(config: Config) -> Result<Self> {
        let db = DbService::new(&config.database_url)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;
        let jwt = Arc::new(JwtService::with_config(JwtConfig::new(
            config.jwt_secret.clone(),
        )));

        Ok(Self {
            config,
            pool: db.pool,
            jwt,
        })
    }
}
