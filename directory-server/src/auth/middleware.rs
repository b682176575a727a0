//! Request gate middleware
//!
//! Every inbound request passes through [`require_auth`] before it reaches
//! a handler. The decision procedure is an ordered list of rules; the first
//! matching rule wins:
//!
//! 1. Build assets and the favicon pass untouched
//! 2. The session token is read from the `auth-token` cookie
//! 3. Home with no session token redirects to the login page
//! 4. A public path with a token present redirects home
//! 5. A protected path with no token redirects to the login page
//! 6. A protected path with a token gets the token verified; failure
//!    redirects to the login page, success attaches [`CurrentUser`]
//! 7. A public path with no token passes through unmodified
//!
//! Redirects are 307 so the method survives. A failed verification does not
//! tell the client whether the token was expired or malformed.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::{AUTH_COOKIE_NAME, CurrentUser};
use crate::core::AppState;
use crate::security_log;

/// Paths reachable without a session
const PUBLIC_PATHS: &[&str] = &["/login", "/api/auth/login", "/api/health"];

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Build assets and the favicon are never intercepted.
fn is_static_asset(path: &str) -> bool {
    path.starts_with("/_next/static") || path.starts_with("/_next/image") || path == "/favicon.ico"
}

fn redirect_to_login() -> Response {
    Redirect::temporary("/login").into_response()
}

/// Request gate: ordered rules, first match wins
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let path = req.uri().path().to_string();

    // CORS preflight is never gated
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Rule 1: build assets pass untouched
    if is_static_asset(&path) {
        return Ok(next.run(req).await);
    }

    let is_public = is_public_path(&path);

    // Rule 2: session token from the auth cookie
    let token = jar
        .get(AUTH_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty());

    // Rule 3: home with no session token goes to the login page
    if path == "/" && token.is_none() {
        return Err(redirect_to_login());
    }

    // Rule 4: an authenticated client does not revisit public pages
    if is_public && token.is_some() {
        return Err(Redirect::temporary("/").into_response());
    }

    match token {
        // Rule 5: protected path with no session token
        None if !is_public => {
            security_log!("WARN", "gate_no_token", path = path.clone());
            Err(redirect_to_login())
        }
        // Rule 6: protected path with a session token, verified before entry
        Some(token) if !is_public => {
            match state
                .jwt
                .validate_token(&token)
                .and_then(CurrentUser::try_from)
            {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    Ok(next.run(req).await)
                }
                Err(e) => {
                    security_log!(
                        "WARN",
                        "gate_rejected",
                        error = format!("{}", e),
                        path = path.clone()
                    );
                    Err(redirect_to_login())
                }
            }
        }
        // Rule 7: public path with no token passes through
        _ => Ok(next.run(req).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_classification() {
        assert!(is_public_path("/login"));
        assert!(is_public_path("/api/auth/login"));
        assert!(is_public_path("/api/health"));
        assert!(!is_public_path("/"));
        assert!(!is_public_path("/api/auth/logout"));
        assert!(!is_public_path("/api/employees"));
    }

    #[test]
    fn test_static_assets_bypass() {
        assert!(is_static_asset("/_next/static/chunks/main.js"));
        assert!(is_static_asset("/_next/image?url=x"));
        assert!(is_static_asset("/favicon.ico"));
        assert!(!is_static_asset("/api/employees"));
        assert!(!is_static_asset("/login"));
    }
}
