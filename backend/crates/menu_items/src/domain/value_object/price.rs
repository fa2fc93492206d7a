//! Price Value Object
//!
//! Positive amount with at most two fraction digits that fits
//! `NUMERIC(10,2)`. Always carried at scale 2 so it prints as `"12.50"`.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("Not a valid decimal value.")]
    NotDecimal,

    #[error("Price must be between 0.01 and 99999999.99.")]
    OutOfRange,

    #[error("Price cannot have more than 2 decimal places.")]
    TooPrecise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    pub const SCALE: u32 = 2;

    /// 99999999.99
    pub const MAX: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO || amount > Self::MAX {
            return Err(PriceError::OutOfRange);
        }
        if amount.normalize().scale() > Self::SCALE {
            return Err(PriceError::TooPrecise);
        }
        Ok(Self::from_stored(amount))
    }

    /// Parse client input such as `"12.5"` or `"  3 "`
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(input.trim()).map_err(|_| PriceError::NotDecimal)?;
        Self::new(amount)
    }

    /// Wrap a value read from a `NUMERIC(10,2)` column
    pub fn from_stored(mut amount: Decimal) -> Self {
        amount.rescale(Self::SCALE);
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
