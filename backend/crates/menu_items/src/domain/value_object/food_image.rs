//! Food Image Value Object
//!
//! Absolute `http`/`https` URL of the dish photo.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodImageError {
    #[error("Field cannot be longer than {max} characters.")]
    TooLong { max: usize },

    #[error("Invalid URL.")]
    InvalidUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoodImage(String);

impl FoodImage {
    /// Column width of `food_image`
    pub const MAX_LEN: usize = 2048;

    pub fn new(input: &str) -> Result<Self, FoodImageError> {
        let input = input.trim();
        if input.chars().count() > Self::MAX_LEN {
            return Err(FoodImageError::TooLong { max: Self::MAX_LEN });
        }

        let url = Url::parse(input).map_err(|_| FoodImageError::InvalidUrl)?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(FoodImageError::InvalidUrl);
        }

        // Keep what the client sent; `Url` would normalise it
        Ok(Self(input.to_string()))
    }

    /// Wrap a value read from the database without re-validating it
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
