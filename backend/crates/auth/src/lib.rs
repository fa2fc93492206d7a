//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, signed token value object, repository trait
//! - `application/` - Session verification use case
//! - `infra/` - Database implementations
//! - `presentation/` - Middleware guarding protected routes, CSRF cookie injection
//!
//! Sessions are issued by the sign-in flow of the wider application.
//! This crate verifies them and exposes the signed-in user to handlers.
//!
//! ## Security Model
//! - Session cookie is `<session-uuid>.<HMAC-SHA256 signature>`
//! - Sessions bound to client fingerprint (User-Agent)
//! - Every response refreshes a missing or stale `csrf_token` cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthSessionRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser, require_auth_session};

pub mod store {
    pub use crate::infra::postgres::PgAuthSessionRepository as AuthSessionStore;
}

pub mod middleware {
    pub use crate::presentation::csrf::inject_csrf_cookie;
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
