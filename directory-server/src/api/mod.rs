//! HTTP API
//!
//! One module per resource, each exposing a `router()`. `build_app` merges
//! them, applies the request gate and the shared tower-http middleware.

pub mod auth;
pub mod employees;
pub mod health;

use axum::{Router, middleware};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::AppState;

/// Plain `{ "message": ... }` body used by logout and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// HTTP request logging middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the application router
///
/// The request gate runs before every handler; public paths are let
/// through inside the gate itself, so nothing here is exempt.
pub fn build_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(auth::router())
        .merge(employees::router())
        .merge(health::router())
        // Request gate
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        // Tower HTTP middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP request logging middleware
        .layer(middleware::from_fn(log_request))
}
