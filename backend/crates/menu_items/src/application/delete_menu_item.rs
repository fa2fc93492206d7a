//! Delete Menu Item Use Case
//!
//! Deletes and commits, then reads the id back to confirm the row is gone.

use kernel::id::MenuItemId;
use std::sync::Arc;

use crate::domain::repository::MenuItemRepository;
use crate::error::{MenuItemError, MenuItemResult};

pub const DELETED_MESSAGE: &str = "Successfully deleted menu item";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMenuItemOutput {
    pub id: MenuItemId,
    pub message: &'static str,
}

pub struct DeleteMenuItemUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> DeleteMenuItemUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: MenuItemId) -> MenuItemResult<DeleteMenuItemOutput> {
        if !self.repo.delete(id).await? {
            return Err(MenuItemError::NotFound(id));
        }

        if self.repo.exists(id).await? {
            return Err(MenuItemError::DeleteNotConfirmed(id));
        }

        tracing::info!(menu_item_id = %id, "Menu item deleted");

        Ok(DeleteMenuItemOutput {
            id,
            message: DELETED_MESSAGE,
        })
    }
}
