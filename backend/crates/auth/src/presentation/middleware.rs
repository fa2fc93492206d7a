//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.
//!
//! ```ignore
//! Router::new()
//!     .route("/{id}/update", put(update))
//!     .route_layer(axum::middleware::from_fn_with_state(
//!         auth_state,
//!         require_auth_session::<PgAuthSessionRepository>,
//!     ))
//! ```

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use platform::client::{extract_client_ip, extract_fingerprint};
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// The signed-in user, stored in request extensions by [`require_auth_session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub session_id: Uuid,
}

/// Middleware that requires a valid auth session
///
/// Rejects with 401 + `X-Auth-Required: true` when the cookie is missing,
/// forged, expired or bound to another client.
pub async fn require_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let headers = req.headers();

    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client_ip = extract_client_ip(headers, direct_ip);

    let fingerprint = extract_fingerprint(headers, client_ip)?;

    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name)
        .ok_or(AuthError::SessionInvalid)?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let session = use_case.get_session(&token, &fingerprint.hash).await?;

    tracing::debug!(
        user_id = %session.user_id,
        client_ip = ?fingerprint.ip,
        "Authenticated request"
    );

    req.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        session_id: session.session_id,
    });

    Ok(next.run(req).await)
}
