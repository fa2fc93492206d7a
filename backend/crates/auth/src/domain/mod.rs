//! Domain Layer
//!
//! Contains the session entity, the signed token value object and the
//! repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::auth_session::AuthSession;
pub use repository::AuthSessionRepository;
pub use value_object::session_token::SessionToken;
