use crate::CURRENCY_SCALE;
use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign, Sum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

///
/// Money
///
/// Fixed-point currency amount. Arithmetic is exact to the stored
/// precision; no monetary path goes through floating point.
///
/// Amounts may be negative: a line's discount exceeding its subtotal is
/// valid input and flows through arithmetic unchanged.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
    Sum,
)]
#[repr(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Construct from mantissa and scale.
    #[must_use]
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    /// Construct from an integral number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CURRENCY_SCALE))
    }

    /// Scale by an integral quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Round to currency precision.
    #[must_use]
    pub fn round_currency(self) -> Self {
        Self(self.0.round_dp(CURRENCY_SCALE))
    }

    /// Returns true for amounts strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Render at exactly currency precision, zero-padded ("24.00", "-3.50").
    #[must_use]
    pub fn currency_string(&self) -> String {
        let mut value = self.0.round_dp(CURRENCY_SCALE);
        value.rescale(CURRENCY_SCALE);
        value.to_string()
    }
}

///
/// TESTS
///
