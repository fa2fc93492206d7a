//! Food Type Value Object
//!
//! Closed set of menu sections, stored as `SMALLINT`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoodType {
    Appetizer,
    Entree,
    Side,
    Dessert,
    Beverage,
}

impl FoodType {
    pub const ALL: [FoodType; 5] = [
        FoodType::Appetizer,
        FoodType::Entree,
        FoodType::Side,
        FoodType::Dessert,
        FoodType::Beverage,
    ];

    /// Stored discriminant
    pub const fn id(self) -> i16 {
        match self {
            FoodType::Appetizer => 0,
            FoodType::Entree => 1,
            FoodType::Side => 2,
            FoodType::Dessert => 3,
            FoodType::Beverage => 4,
        }
    }

    /// Code shown to and accepted from clients
    pub const fn code(self) -> &'static str {
        match self {
            FoodType::Appetizer => "Appetizer",
            FoodType::Entree => "Entree",
            FoodType::Side => "Side",
            FoodType::Dessert => "Dessert",
            FoodType::Beverage => "Beverage",
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Case-sensitive
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
