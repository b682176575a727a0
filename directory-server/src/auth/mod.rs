//! Authentication module
//!
//! JWT session tokens, password hashing, the session cookie, and the
//! request gate:
//! - [`JwtService`] - session token mint/verify
//! - [`CurrentUser`] - verified identity for the current request
//! - [`require_auth`] - request gate middleware

pub mod cookie;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use cookie::{AUTH_COOKIE_NAME, clear_auth_cookie, create_auth_cookie};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
