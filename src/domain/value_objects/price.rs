//! # Price Value Object
//!
//! A finite, strictly positive decimal price.
//!
//! Every price entering the engine (the listed price, a starting price, an
//! offer) is validated once at the boundary by constructing a [`Price`].
//! Downstream code can then rely on positivity without re-checking.
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::value_objects::price::Price;
//!
//! let price = Price::new(45.0).unwrap();
//! assert!(Price::new(-5.0).is_err());
//! assert!(Price::new(f64::NAN).is_err());
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// A validated price: finite and strictly greater than zero.
///
/// Backed by a fixed-point decimal so marketplace amounts round-trip exactly
/// through serialization.
///
/// # Invariants
///
/// - Always `> 0`
/// - Never NaN or infinite (unrepresentable in the backing decimal)
///
/// # Examples
///
/// ```
/// use bargain_engine::domain::value_objects::price::Price;
///
/// let listed = Price::new(50.0).unwrap();
/// let offer = Price::new(45.0).unwrap();
/// assert!(offer < listed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a floating-point amount.
    ///
    /// # Arguments
    ///
    /// * `value` - The amount; must be finite and `> 0`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is NaN, infinite,
    /// zero, or negative.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::InvalidPrice(format!(
                "price must be a finite number, got {value}"
            )));
        }
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            DomainError::InvalidPrice(format!("price {value} is not representable"))
        })?;
        Self::from_decimal(decimal)
    }

    /// Creates a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is zero or negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::InvalidPrice(format!(
                "price must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the price as an `f64`, for display-oriented consumers.
    ///
    /// Returns `None` if the value does not fit an `f64`.
    #[inline]
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}
