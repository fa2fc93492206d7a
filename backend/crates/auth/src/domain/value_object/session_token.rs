//! Session Token Value Object
//!
//! The value of the session cookie: `<session-uuid>.<base64url(HMAC-SHA256(secret, uuid))>`.
//! The signature lets us reject forged cookies without touching the database.

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Sign a session ID
    pub fn sign(session_id: Uuid, secret: &[u8; 32]) -> Self {
        let id = session_id.to_string();
        let signature = hmac_sha256(secret, id.as_bytes());
        Self(format!("{}.{}", id, to_base64_url(&signature)))
    }

    /// Verify the signature and return the session ID
    pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
        let (id, signature_b64) = token.split_once('.')?;
        let signature = from_base64_url(signature_b64).ok()?;

        if !verify_hmac_sha256(secret, id.as_bytes(), &signature) {
            return None;
        }

        id.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
