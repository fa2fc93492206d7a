//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Cookie management
//! - Client fingerprinting from request headers
//! - CSRF token issuing and verification

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod csrf;
