//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{MenuItemId, RestaurantId};
use serde::{Deserialize, Serialize};

use crate::application::DeleteMenuItemOutput;
use crate::domain::entity::MenuItem;
use crate::domain::value_object::{FoodImage, FoodType, Price};

/// Menu item as the front end consumes it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub food_type: FoodType,
    pub description: String,
    pub price: Price,
    pub food_image: FoodImage,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            restaurant_id: item.restaurant_id,
            name: item.name,
            food_type: item.food_type,
            description: item.description,
            price: item.price,
            food_image: item.food_image,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Response for GET /api/menu-items
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemListResponse {
    pub menu_items: Vec<MenuItemResponse>,
}

/// Query for GET /api/menu-items
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMenuItemsQuery {
    #[serde(default)]
    pub restaurant_id: Option<RestaurantId>,
}

/// Response for DELETE /api/menu-items/{id}/delete
#[derive(Debug, Clone, Serialize)]
pub struct DeleteMenuItemResponse {
    pub message: &'static str,
    pub id: MenuItemId,
}

impl From<DeleteMenuItemOutput> for DeleteMenuItemResponse {
    fn from(output: DeleteMenuItemOutput) -> Self {
        Self {
            message: output.message,
            id: output.id,
        }
    }
}
