//! Tax & Aggregation

use super::money::{add_or_keep, mul_or_zero, round_currency};
use rust_decimal::prelude::*;

/// Consumption tax rate (10%)
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// round((subtotal + shipping) × 10%)
pub fn calculate_tax(subtotal: Decimal, shipping_cost: Decimal) -> Decimal {
    round_currency(mul_or_zero(add_or_keep(subtotal, shipping_cost), TAX_RATE))
}

/// Tax-inclusive total divided by the effective quantity, unrounded
///
/// Zero when there is nothing to divide by.
pub fn cost_per_garment(total_with_tax: Decimal, effective_quantity: u64) -> Decimal {
    if effective_quantity == 0 {
        return Decimal::ZERO;
    }
    total_with_tax / Decimal::from(effective_quantity)
}
