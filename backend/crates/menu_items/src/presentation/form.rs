//! Menu item edit form
//!
//! Body of PUT /api/menu-items/{id}/update. Every field is checked and all
//! failures are reported together, keyed by the JSON field name.

use kernel::error::validation::ValidationErrors;
use platform::csrf::{CSRF_FIELD, CsrfError};
use serde::Deserialize;
use serde_json::Value;

use crate::application::config::MenuItemsConfig;
use crate::domain::entity::{MenuItem, MenuItemChanges};
use crate::domain::value_object::{FoodImage, FoodType, Price, PriceError};

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_CHOICE: &str = "Not a valid choice.";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub food_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON number or numeric string
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub food_image: Option<String>,
}

impl MenuItemForm {
    /// Check the CSRF outcome and every field
    pub fn validate(
        self,
        csrf: Result<(), CsrfError>,
        config: &MenuItemsConfig,
    ) -> Result<MenuItemChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = csrf {
            errors.add(CSRF_FIELD, e.to_string());
        }

        let name = text_field(&mut errors, "name", self.name, MenuItem::NAME_MAX_LEN);
        let food_type = food_type_field(&mut errors, self.food_type);
        let description = text_field(
            &mut errors,
            "description",
            self.description,
            config.description_max_len,
        );
        let price = price_field(&mut errors, self.price);
        let food_image = food_image_field(&mut errors, self.food_image);

        match (name, food_type, description, price, food_image) {
            (Some(name), Some(food_type), Some(description), Some(price), Some(food_image))
                if errors.is_empty() =>
            {
                Ok(MenuItemChanges {
                    name,
                    food_type,
                    description,
                    price,
                    food_image,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Trimmed, non-blank input
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn text_field(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let Some(value) = present(value) else {
        errors.add(field, REQUIRED);
        return None;
    };

    if value.chars().count() > max_len {
        errors.add(
            field,
            format!("Field cannot be longer than {max_len} characters."),
        );
        return None;
    }

    Some(value)
}

fn food_type_field(errors: &mut ValidationErrors, value: Option<String>) -> Option<FoodType> {
    let Some(code) = present(value) else {
        errors.add("foodType", REQUIRED);
        return None;
    };

    let food_type = FoodType::from_code(&code);
    if food_type.is_none() {
        errors.add("foodType", INVALID_CHOICE);
    }
    food_type
}

fn price_field(errors: &mut ValidationErrors, value: Option<Value>) -> Option<Price> {
    let parsed = match value {
        None | Some(Value::Null) => {
            errors.add("price", REQUIRED);
            return None;
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.add("price", REQUIRED);
            return None;
        }
        Some(Value::String(s)) => Price::parse(&s),
        Some(Value::Number(n)) => Price::parse(&n.to_string()),
        Some(_) => Err(PriceError::NotDecimal),
    };

    parsed.map_err(|e| errors.add("price", e.to_string())).ok()
}

fn food_image_field(errors: &mut ValidationErrors, value: Option<String>) -> Option<FoodImage> {
    let Some(url) = present(value) else {
        errors.add("foodImage", REQUIRED);
        return None;
    };

    FoodImage::new(&url)
        .map_err(|e| errors.add("foodImage", e.to_string()))
        .ok()
}
