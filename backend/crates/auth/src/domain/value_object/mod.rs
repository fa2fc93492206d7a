//! Value Object Module

pub mod session_token;
