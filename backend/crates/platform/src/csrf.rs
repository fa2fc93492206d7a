//! CSRF Tokens
//!
//! Signed, time-limited anti-forgery tokens carried in a cookie.
//!
//! Token layout:
//! `base64url(nonce[16] || issued_at_ms[8, BE]) "." base64url(HMAC-SHA256(secret, payload))`

use std::time::Duration;

use chrono::Utc;

use crate::cookie::{CookieConfig, SameSite};
use crate::crypto::{
    from_base64_url, hmac_sha256, random_bytes, random_secret, to_base64_url, verify_hmac_sha256,
};

/// Form field name CSRF failures are reported under
pub const CSRF_FIELD: &str = "csrf_token";

const NONCE_LEN: usize = 16;
const PAYLOAD_LEN: usize = NONCE_LEN + 8;
/// Tolerated clock skew for tokens stamped slightly in the future
const MAX_FUTURE_SKEW_MS: i64 = 60_000;

/// Why a CSRF token was rejected. Messages are client-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,
    #[error("The CSRF token is invalid.")]
    Invalid,
    #[error("The CSRF token has expired.")]
    Expired,
}

#[derive(Debug, Clone)]
pub struct CsrfConfig {
    /// HMAC key (32 bytes)
    pub secret: [u8; 32],
    /// Token lifetime, also used as the cookie Max-Age
    pub ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            secret: [0u8; 32],
            ttl: Duration::from_secs(3600),
            cookie_name: CSRF_FIELD.to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
        }
    }
}

impl CsrfConfig {
    /// Config with a random secret and insecure cookie (for development)
    pub fn development() -> Self {
        Self {
            secret: random_secret(),
            cookie_secure: false,
            ..Self::default()
        }
    }

    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.ttl.as_secs()),
        }
    }

    /// Issue a token stamped with the current time
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now().timestamp_millis())
    }

    pub fn issue_at(&self, now_ms: i64) -> String {
        let mut payload = random_bytes(NONCE_LEN);
        payload.extend_from_slice(&now_ms.to_be_bytes());

        let signature = hmac_sha256(&self.secret, &payload);
        format!("{}.{}", to_base64_url(&payload), to_base64_url(&signature))
    }

    /// Verify a token (if any) against the current time
    pub fn verify(&self, token: Option<&str>) -> Result<(), CsrfError> {
        self.verify_at(token, Utc::now().timestamp_millis())
    }

    pub fn verify_at(&self, token: Option<&str>, now_ms: i64) -> Result<(), CsrfError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(CsrfError::Missing)?;

        let (payload_b64, signature_b64) = token.split_once('.').ok_or(CsrfError::Invalid)?;
        let payload = from_base64_url(payload_b64).map_err(|_| CsrfError::Invalid)?;
        let signature = from_base64_url(signature_b64).map_err(|_| CsrfError::Invalid)?;

        if payload.len() != PAYLOAD_LEN || !verify_hmac_sha256(&self.secret, &payload, &signature)
        {
            return Err(CsrfError::Invalid);
        }

        let mut issued = [0u8; 8];
        issued.copy_from_slice(&payload[NONCE_LEN..]);
        let issued_at_ms = i64::from_be_bytes(issued);

        if issued_at_ms > now_ms + MAX_FUTURE_SKEW_MS {
            return Err(CsrfError::Invalid);
        }
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        if now_ms.saturating_sub(issued_at_ms) > ttl_ms {
            return Err(CsrfError::Expired);
        }

        Ok(())
    }
}
