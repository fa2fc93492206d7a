//! Server settings read from the environment (and `.env`)

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth_session_secret: [u8; 32],
    pub csrf_secret: [u8; 32],
    pub cookie_secure: bool,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let cookie_secure = match env::var("COOKIE_SECURE") {
            Ok(v) => parse_bool(&v).context("COOKIE_SECURE must be true or false")?,
            Err(_) => !cfg!(debug_assertions),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth_session_secret: secret_from_env("AUTH_SESSION_SECRET")?,
            csrf_secret: secret_from_env("CSRF_SECRET")?,
            cookie_secure,
        })
    }
}

/// Base64 secret from `var`; debug builds fall back to a random one
fn secret_from_env(var: &str) -> anyhow::Result<[u8; 32]> {
    match env::var(var) {
        Ok(b64) => parse_secret(&b64).with_context(|| format!("{var} is invalid")),
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!(var, "Secret not set, using a random one for this process");
            Ok(platform::crypto::random_secret())
        }
        Err(_) => bail!("{var} must be set in production"),
    }
}

fn parse_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(b64.trim()).context("not valid base64")?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected 32 bytes, got {len}"))
}

fn parse_origins(list: &str) -> Vec<HeaderValue> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => bail!("unexpected value {other:?}"),
    }
}
