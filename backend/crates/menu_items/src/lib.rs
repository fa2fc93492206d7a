//! Menu Items Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Menu item entity, food type and price value objects, repository trait
//! - `application/` - Read, list, update and delete use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, form validation, router
//!
//! Menu items are created by the restaurant management flow. This crate
//! reads them, updates them in place and deletes them.
//!
//! ## Access Model
//! - Reads are public
//! - Update and delete require an `auth_session` cookie
//! - Update additionally checks the `csrf_token` cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MenuItemsConfig;
pub use error::{MenuItemError, MenuItemResult};
pub use infra::postgres::PgMenuItemRepository;
pub use presentation::router::{menu_items_router, menu_items_router_generic};

pub mod store {
    pub use crate::infra::postgres::PgMenuItemRepository as MenuItemStore;
}

#[cfg(test)]
mod tests;
