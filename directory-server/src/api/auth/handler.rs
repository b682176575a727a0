//! Authentication Handlers
//!
//! Handles login, logout, and current-identity lookup

use std::time::Duration;

use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::header;
use serde::{Deserialize, Serialize};

use crate::api::MessageResponse;
use crate::auth::{CurrentUser, clear_auth_cookie, create_auth_cookie, verify_password};
use crate::core::AppState;
use crate::db::repository::admin;
use crate::security_log;
use crate::utils::AppError;
use shared::models::AdminInfo;
use shared::util::normalize_email;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login request body
///
/// Fields default to empty so an absent field reports the same
/// validation error as a blank one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: AdminInfo,
}

/// Current-identity response body
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: AdminInfo,
}

/// Login handler
///
/// Verifies credentials and delivers the session token as an HttpOnly
/// cookie on the response
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::validation("Email and password are required"));
    }

    let account = admin::find_by_email(&state.pool, &email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent account enumeration
    let account = match account {
        Some(a) => {
            if !verify_password(&req.password, &a.password_hash) {
                security_log!(
                    "WARN",
                    "login_failed",
                    reason = "invalid_credentials",
                    email = email.clone()
                );
                tracing::warn!(email = %email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            a
        }
        None => {
            security_log!(
                "WARN",
                "login_failed",
                reason = "user_not_found",
                email = email.clone()
            );
            tracing::warn!(email = %email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user = AdminInfo::from(&account);
    let token = state
        .jwt
        .generate_token(&user)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    security_log!(
        "INFO",
        "login_success",
        user_id = user.id,
        email = user.email.clone()
    );
    tracing::info!(
        user_id = %user.id,
        email = %user.email,
        "User logged in successfully"
    );

    let cookie = create_auth_cookie(&token, state.config.is_production());

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful",
            user,
        }),
    )
        .into_response())
}

/// Get current admin identity, as attached by the request gate
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<MeResponse> {
    Json(MeResponse {
        user: AdminInfo::from(&user),
    })
}

/// Logout handler
///
/// Overwrites the session cookie with an expired one. Idempotent: a
/// second logout clears an already-cleared cookie the same way.
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Response {
    security_log!(
        "INFO",
        "logout",
        user_id = user.id,
        email = user.email.clone()
    );
    tracing::info!(
        user_id = %user.id,
        email = %user.email,
        "User logged out"
    );

    let cookie = clear_auth_cookie(state.config.is_production());

    (
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    )
        .into_response()
}
