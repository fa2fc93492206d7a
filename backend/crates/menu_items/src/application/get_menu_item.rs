//! Get Menu Item Use Case

use kernel::id::MenuItemId;
use std::sync::Arc;

use crate::domain::entity::MenuItem;
use crate::domain::repository::MenuItemRepository;
use crate::error::{MenuItemError, MenuItemResult};

pub struct GetMenuItemUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> GetMenuItemUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: MenuItemId) -> MenuItemResult<MenuItem> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MenuItemError::NotFound(id))
    }
}
