//! Money helpers using rust_decimal for precision
//!
//! Prices and payments are `f64` at the API surface. Sums go through
//! `Decimal` when every amount fits; rounding to 2 decimal places happens
//! only when an amount is rendered.

use rust_decimal::prelude::*;

/// Rounding precision for rendered amounts
const DECIMAL_PLACES: u32 = 2;

/// Currency suffix used in rendered prices and bills
pub const CURRENCY: &str = "GBP";

/// Convert f64 to Decimal for calculation.
///
/// `None` for non-finite values and for magnitudes beyond `Decimal::MAX`.
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64, unrounded
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum a sequence of amounts.
///
/// Exact in `Decimal` when every amount converts and no addition overflows;
/// otherwise the plain `f64` sum.
pub fn sum<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let amounts: Vec<f64> = amounts.into_iter().collect();
    decimal_sum(&amounts).map(to_f64).unwrap_or_else(|| {
        tracing::debug!(count = amounts.len(), "Amounts exceed Decimal range, summing as f64");
        amounts.iter().sum()
    })
}

fn decimal_sum(amounts: &[f64]) -> Option<Decimal> {
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |acc, &amount| acc.checked_add(to_decimal(amount)?))
}

/// Format an amount as `123.00 GBP`
pub fn format_amount(value: f64) -> String {
    match to_decimal(value) {
        Some(d) => format!("{:.2} {}", round_money(d), CURRENCY),
        None => format!("{:.2} {}", value, CURRENCY),
    }
}
