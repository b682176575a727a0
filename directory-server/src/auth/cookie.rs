//! Session cookie construction
//!
//! The session token travels in an HTTP-only cookie that page scripts
//! cannot read. Both builders emit `Path=/` so the clear cookie actually
//! replaces the one set at login.

/// Cookie name carrying the session token
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// Session cookie lifetime: 24 hours
pub const AUTH_COOKIE_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// Create a Set-Cookie header value delivering a session token.
///
/// `secure` adds the Secure attribute (production deployments).
pub fn create_auth_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        AUTH_COOKIE_NAME, token, AUTH_COOKIE_MAX_AGE_SECS
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Create a Set-Cookie header value that expires the session cookie now.
pub fn clear_auth_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0",
        AUTH_COOKIE_NAME
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
