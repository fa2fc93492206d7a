//! Middleware tests against an in-memory session store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode, header};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use chrono::Duration;
use kernel::id::UserId;
use platform::crypto::sha256;
use platform::csrf::CsrfConfig;
use tower::ServiceExt;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AUTH_REQUIRED_HEADER, AuthError, AuthResult};
use crate::presentation::csrf::inject_csrf_cookie;
use crate::presentation::middleware::{AuthMiddlewareState, CurrentUser, require_auth_session};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) TestBrowser/1.0";

#[derive(Clone, Default)]
struct MemorySessions {
    sessions: Arc<Mutex<HashMap<Uuid, AuthSession>>>,
}

impl MemorySessions {
    fn insert(&self, session: AuthSession) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session);
    }

    fn contains(&self, session_id: Uuid) -> bool {
        self.sessions.lock().unwrap().contains_key(&session_id)
    }
}

impl AuthSessionRepository for MemorySessions {
    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AuthSession>> {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(s) if !s.belongs_to(fingerprint_hash) => {
                Err(AuthError::SessionFingerprintMismatch)
            }
            found => Ok(found.cloned()),
        }
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        self.insert(session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }
}

fn config() -> AuthConfig {
    AuthConfig::with_secret([9u8; 32])
}

fn protected_app(repo: MemorySessions) -> Router {
    async fn whoami(Extension(user): Extension<CurrentUser>) -> String {
        user.user_id.to_string()
    }

    let state = AuthMiddlewareState::new(repo, config());
    Router::new()
        .route("/me", get(whoami))
        .route_layer(from_fn_with_state(
            state,
            require_auth_session::<MemorySessions>,
        ))
}

fn live_session(repo: &MemorySessions, user_id: i32, ttl: Duration) -> (AuthSession, SessionToken) {
    let session = AuthSession::new(
        UserId::new(user_id),
        false,
        sha256(USER_AGENT.as_bytes()).to_vec(),
        ttl,
    );
    repo.insert(session.clone());
    let token = SessionToken::sign(session.session_id, &config().session_secret);
    (session, token)
}

fn request(cookie: Option<String>, user_agent: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/me");
    if let Some(ua) = user_agent {
        builder = builder.header(header::USER_AGENT, ua);
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_valid_session_reaches_handler() {
    let repo = MemorySessions::default();
    let (_, token) = live_session(&repo, 7, Duration::hours(1));

    let response = protected_app(repo)
        .oneshot(request(Some(format!("auth_session={token}")), Some(USER_AGENT)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"7");
}

#[tokio::test]
async fn test_missing_cookie_is_unauthorized() {
    let response = protected_app(MemorySessions::default())
        .oneshot(request(None, Some(USER_AGENT)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[AUTH_REQUIRED_HEADER], "true");

    let body = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 401);
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let repo = MemorySessions::default();
    let (session, _) = live_session(&repo, 7, Duration::hours(1));
    let forged = SessionToken::sign(session.session_id, &[1u8; 32]);

    let response = protected_app(repo)
        .oneshot(request(Some(format!("auth_session={forged}")), Some(USER_AGENT)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_other_client_is_unauthorized() {
    let repo = MemorySessions::default();
    let (_, token) = live_session(&repo, 7, Duration::hours(1));

    let response = protected_app(repo)
        .oneshot(request(Some(format!("auth_session={token}")), Some("curl/8.0")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_session_is_rejected_and_removed() {
    let repo = MemorySessions::default();
    let (session, token) = live_session(&repo, 7, Duration::seconds(-5));

    let response = protected_app(repo.clone())
        .oneshot(request(Some(format!("auth_session={token}")), Some(USER_AGENT)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!repo.contains(session.session_id));
}

#[tokio::test]
async fn test_missing_user_agent_is_bad_request() {
    let repo = MemorySessions::default();
    let (_, token) = live_session(&repo, 7, Duration::hours(1));

    let response = protected_app(repo)
        .oneshot(request(Some(format!("auth_session={token}")), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn csrf_app(config: Arc<CsrfConfig>) -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .layer(from_fn_with_state(config, inject_csrf_cookie))
}

fn csrf_set_cookie(response: &axum::response::Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("csrf_token="))
        .map(str::to_string)
}

#[tokio::test]
async fn test_csrf_cookie_issued_when_absent() {
    let config = Arc::new(CsrfConfig::development());

    let response = csrf_app(config.clone())
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let cookie = csrf_set_cookie(&response).expect("csrf cookie should be set");
    let token = cookie
        .trim_start_matches("csrf_token=")
        .split(';')
        .next()
        .unwrap();
    assert_eq!(config.verify(Some(token)), Ok(()));
}

#[tokio::test]
async fn test_csrf_cookie_kept_when_valid() {
    let config = Arc::new(CsrfConfig::development());
    let token = config.issue();

    let response = csrf_app(config)
        .oneshot(
            Request::builder()
                .uri("/ping")
                .header(header::COOKIE, format!("csrf_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(csrf_set_cookie(&response).is_none());
}
