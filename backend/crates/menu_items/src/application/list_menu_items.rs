//! List Menu Items Use Case

use kernel::id::RestaurantId;
use std::sync::Arc;

use crate::application::config::MenuItemsConfig;
use crate::domain::entity::MenuItem;
use crate::domain::repository::MenuItemRepository;
use crate::error::MenuItemResult;

pub struct ListMenuItemsUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<MenuItemsConfig>,
}

impl<R> ListMenuItemsUseCase<R>
where
    R: MenuItemRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<MenuItemsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        restaurant_id: Option<RestaurantId>,
    ) -> MenuItemResult<Vec<MenuItem>> {
        let items = self.repo.list(restaurant_id, self.config.list_limit).await?;

        if items.len() as i64 >= self.config.list_limit {
            tracing::warn!(
                limit = self.config.list_limit,
                restaurant_id = ?restaurant_id.map(|id| id.get()),
                "Menu item listing truncated"
            );
        }

        Ok(items)
    }
}
