//! Menu Item Entity

use chrono::{DateTime, Utc};
use kernel::id::{MenuItemId, RestaurantId};

use crate::domain::value_object::{FoodImage, FoodType, Price};

/// A dish offered by a restaurant
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
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

/// Validated replacement values for every mutable field
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemChanges {
    pub name: String,
    pub food_type: FoodType,
    pub description: String,
    pub price: Price,
    pub food_image: FoodImage,
}

impl MenuItem {
    /// Column width of `name`
    pub const NAME_MAX_LEN: usize = 255;

    /// Overwrite all mutable fields and stamp the update time
    pub fn apply(&mut self, changes: MenuItemChanges) {
        self.apply_at(changes, Utc::now());
    }

    pub fn apply_at(&mut self, changes: MenuItemChanges, now: DateTime<Utc>) {
        let MenuItemChanges {
            name,
            food_type,
            description,
            price,
            food_image,
        } = changes;

        self.name = name;
        self.food_type = food_type;
        self.description = description;
        self.price = price;
        self.food_image = food_image;
        self.updated_at = now.max(self.updated_at);
    }
}
