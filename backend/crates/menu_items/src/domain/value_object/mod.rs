pub mod food_image;
pub mod food_type;
pub mod price;

pub use food_image::{FoodImage, FoodImageError};
pub use food_type::FoodType;
pub use price::{Price, PriceError};
