//! Presentation Layer
//!
//! Middleware for protected routes and CSRF cookie handling.

pub mod csrf;
pub mod middleware;

pub use csrf::inject_csrf_cookie;
pub use middleware::{AuthMiddlewareState, CurrentUser, require_auth_session};
