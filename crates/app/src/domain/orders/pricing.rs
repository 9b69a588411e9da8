//! Order pricing.

use rust_decimal::Decimal;

/// Largest accepted difference between a submitted and a computed total.
pub const TOTAL_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// `price × quantity`.
#[must_use]
pub fn line_total(price: Decimal, quantity: i32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Sum of line totals, rounded to cents.
#[must_use]
pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (Decimal, i32)>,
{
    lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .sum::<Decimal>()
        .round_dp(2)
}

/// Whether `submitted` is within [`TOTAL_TOLERANCE`] of `expected`.
#[must_use]
pub fn totals_match(expected: Decimal, submitted: Decimal) -> bool {
    (expected - submitted).abs() <= TOTAL_TOLERANCE
}
