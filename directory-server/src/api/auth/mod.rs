//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::AppState;

/// Build authentication router
/// - /api/auth/login: public (no session required)
/// - /api/auth/me, /api/auth/logout: behind the request gate
pub fn router() -> Router<AppState> {
    Router::new()
        // Public route - listed in the gate's public paths
        .route("/api/auth/login", post(handler::login))
        // Protected routes - require a session (handled by the global require_auth middleware)
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
