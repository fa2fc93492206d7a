//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{MenuItemId, RestaurantId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entity::MenuItem;
use crate::domain::repository::MenuItemRepository;
use crate::domain::value_object::{FoodImage, FoodType, Price};
use crate::error::{MenuItemError, MenuItemResult};

const MENU_ITEM_COLUMNS: &str = r#"
    id,
    restaurant_id,
    name,
    food_type,
    description,
    price,
    food_image,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed menu item repository
#[derive(Clone)]
pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MenuItemRepository for PgMenuItemRepository {
    async fn find_by_id(&self, id: MenuItemId) -> MenuItemResult<Option<MenuItem>> {
        let sql = format!("SELECT {MENU_ITEM_COLUMNS} FROM menu_items WHERE id = $1");

        let row = sqlx::query_as::<_, MenuItemRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(MenuItemRow::into_menu_item).transpose()
    }

    async fn list(
        &self,
        restaurant_id: Option<RestaurantId>,
        limit: i64,
    ) -> MenuItemResult<Vec<MenuItem>> {
        let sql = format!(
            r#"
            SELECT {MENU_ITEM_COLUMNS}
            FROM menu_items
            WHERE $1::INTEGER IS NULL OR restaurant_id = $1
            ORDER BY id
            LIMIT $2
            "#
        );

        let rows = sqlx::query_as::<_, MenuItemRow>(&sql)
            .bind(restaurant_id.map(|id| id.get()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(MenuItemRow::into_menu_item).collect()
    }

    async fn update(&self, item: &MenuItem) -> MenuItemResult<Option<MenuItem>> {
        let sql = format!(
            r#"
            UPDATE menu_items SET
                name = $2,
                food_type = $3,
                description = $4,
                price = $5,
                food_image = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {MENU_ITEM_COLUMNS}
            "#
        );

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, MenuItemRow>(&sql)
            .bind(item.id.get())
            .bind(&item.name)
            .bind(item.food_type.id())
            .bind(&item.description)
            .bind(item.price.amount())
            .bind(item.food_image.as_str())
            .bind(item.updated_at)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        row.map(MenuItemRow::into_menu_item).transpose()
    }

    async fn delete(&self, id: MenuItemId) -> MenuItemResult<bool> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id.get())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(deleted > 0)
    }

    async fn exists(&self, id: MenuItemId) -> MenuItemResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM menu_items WHERE id = $1)")
                .bind(id.get())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: i32,
    restaurant_id: i32,
    name: String,
    food_type: i16,
    description: String,
    price: Decimal,
    food_image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuItemRow {
    fn into_menu_item(self) -> MenuItemResult<MenuItem> {
        let food_type = FoodType::from_id(self.food_type).ok_or_else(|| {
            MenuItemError::CorruptRecord(format!(
                "menu item {} has unknown food_type {}",
                self.id, self.food_type
            ))
        })?;

        Ok(MenuItem {
            id: MenuItemId::new(self.id),
            restaurant_id: RestaurantId::new(self.restaurant_id),
            name: self.name,
            food_type,
            description: self.description,
            price: Price::from_stored(self.price),
            food_image: FoodImage::from_stored(self.food_image),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
