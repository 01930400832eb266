//! Money helpers
//!
//! Inputs arrive as `f64`; all arithmetic runs on `Decimal` and is converted
//! back only for the breakdown. Amounts are whole currency units.

use rust_decimal::prelude::*;

/// Whole currency units (yen)
const CURRENCY_DECIMAL_PLACES: u32 = 0;

/// Convert f64 to Decimal for calculation (NaN / infinity become zero)
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to whole currency units, half away from zero
#[inline]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to whole currency units
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_currency(value).to_f64().unwrap_or_default()
}

/// Convert Decimal back to f64 without rounding
#[inline]
pub fn to_f64_exact(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `lhs × rhs`, or zero when the product leaves the Decimal range
pub fn mul_or_zero(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        tracing::warn!(%lhs, %rhs, "Amount overflow, product counted as zero");
        Decimal::ZERO
    })
}

/// `total + amount`, or `total` unchanged when the sum leaves the Decimal range
pub fn add_or_keep(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(%total, %amount, "Amount overflow, addend dropped");
        total
    })
}

/// Sum of amounts, dropping any addend that would overflow
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, add_or_keep)
}
