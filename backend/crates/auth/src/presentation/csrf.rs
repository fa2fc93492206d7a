//! CSRF cookie injection
//!
//! Every response carries a usable `csrf_token` cookie: when the request did
//! not present a valid one, a fresh token is issued on the way out.
//! Mutating handlers verify the cookie as part of form validation.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use platform::csrf::CsrfConfig;
use std::sync::Arc;

pub async fn inject_csrf_cookie(
    State(config): State<Arc<CsrfConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let presented = platform::cookie::extract_cookie(req.headers(), &config.cookie_name);
    let needs_token = config.verify(presented.as_deref()).is_err();

    let mut response = next.run(req).await;

    if needs_token {
        match config.cookie().set_cookie_header(&config.issue()) {
            Some(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            None => tracing::warn!("Failed to build CSRF cookie header"),
        }
    }

    response
}
