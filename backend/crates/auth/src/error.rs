//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Header telling the front end to send the user to sign-in
pub const AUTH_REQUIRED_HEADER: &str = "x-auth-required";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No cookie, bad signature, unknown or expired session
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Session exists but was created by another client
    #[error("Session fingerprint mismatch")]
    SessionFingerprintMismatch,

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SessionInvalid | AuthError::SessionFingerprintMismatch => {
                ErrorKind::Unauthorized
            }
            AuthError::MissingHeader(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-facing error. Details of 5xx errors stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::SessionInvalid | AuthError::SessionFingerprintMismatch => {
                AppError::unauthorized("Authentication required")
                    .with_action("Please sign in and try again")
            }
            AuthError::MissingHeader(_) => AppError::bad_request(self.to_string()),
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Failed to verify session")
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::SessionFingerprintMismatch => {
                tracing::warn!("Session fingerprint mismatch detected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let requires_auth = self.kind() == ErrorKind::Unauthorized;
        let mut response = self.to_app_error().into_response();
        if requires_auth {
            response
                .headers_mut()
                .insert(AUTH_REQUIRED_HEADER, HeaderValue::from_static("true"));
        }
        response
    }
}

impl From<platform::client::FingerprintError> for AuthError {
    fn from(err: platform::client::FingerprintError) -> Self {
        match err {
            platform::client::FingerprintError::MissingHeader(header) => {
                AuthError::MissingHeader(header)
            }
        }
    }
}
