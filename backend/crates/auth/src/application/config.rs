//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL with "Remember Me" (1 week); used for sliding renewal
    pub session_ttl_long: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "auth_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl_long: Duration::from_secs(7 * 24 * 3600), // 1 week
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn development() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config with a secret loaded from the environment
    pub fn with_secret(session_secret: [u8; 32]) -> Self {
        Self {
            session_secret,
            ..Default::default()
        }
    }
}
