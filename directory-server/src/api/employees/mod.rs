//! Employee API module

mod handler;

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<AppState> {
    // Photo data URLs push create/update bodies past the 2MB default
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .layer(DefaultBodyLimit::max(5 * 1024 * 1024)) // 5MB
}
