//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{MenuItemId, RestaurantId};

use crate::domain::entity::MenuItem;
use crate::error::MenuItemResult;

/// Menu item repository trait
#[trait_variant::make(MenuItemRepository: Send)]
pub trait LocalMenuItemRepository {
    /// Get a menu item by ID
    async fn find_by_id(&self, id: MenuItemId) -> MenuItemResult<Option<MenuItem>>;

    /// List menu items ordered by ID, optionally for one restaurant
    async fn list(
        &self,
        restaurant_id: Option<RestaurantId>,
        limit: i64,
    ) -> MenuItemResult<Vec<MenuItem>>;

    /// Write every mutable field in one transaction
    /// Returns the stored row, or None if it no longer exists
    async fn update(&self, item: &MenuItem) -> MenuItemResult<Option<MenuItem>>;

    /// Delete in one transaction
    /// Returns false if no row matched
    async fn delete(&self, id: MenuItemId) -> MenuItemResult<bool>;

    async fn exists(&self, id: MenuItemId) -> MenuItemResult<bool>;
}
