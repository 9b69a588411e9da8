//! Conversion between major currency units and the provider's minor units.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Minor units per major unit (kobo per naira).
pub const MINOR_UNITS: i64 = 100;

/// `amount` in minor units, rounded half away from zero. `None` when the
/// result does not fit in an `i64`.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::from(MINOR_UNITS))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// `minor` minor units as a major unit amount.
#[must_use]
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}
