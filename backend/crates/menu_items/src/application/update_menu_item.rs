//! Update Menu Item Use Case
//!
//! Overwrites every mutable field of an existing menu item.
//! Input arrives already validated by the presentation layer.

use kernel::id::MenuItemId;
use std::sync::Arc;

use crate::domain::entity::{MenuItem, MenuItemChanges};
use crate::domain::repository::MenuItemRepository;
use crate::error::{MenuItemError, MenuItemResult};

pub struct UpdateMenuItemUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> UpdateMenuItemUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: MenuItemId,
        changes: MenuItemChanges,
    ) -> MenuItemResult<MenuItem> {
        let mut item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(MenuItemError::NotFound(id))?;

        item.apply(changes);

        // The row can vanish between the read and the write
        let stored = self
            .repo
            .update(&item)
            .await?
            .ok_or(MenuItemError::NotFound(id))?;

        tracing::info!(menu_item_id = %id, "Menu item updated");

        Ok(stored)
    }
}
