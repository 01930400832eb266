//! Tiered Cost Calculator
//!
//! A quantity outside every bracket has no price: there is no fallback
//! tier and no extrapolation.

use super::money::{add_or_keep, mul_or_zero, to_decimal};
use rust_decimal::prelude::*;
use shared::models::QuantityTier;

/// Tier whose inclusive range contains `quantity`
pub fn find_tier(quantity: u64, tiers: &[QuantityTier]) -> Option<&QuantityTier> {
    tiers.iter().find(|tier| tier.contains(quantity))
}

/// Per-unit base print price of a design with `color_count` colors
///
/// first color + (colors - 1) × additional color
pub fn unit_print_price(tier: &QuantityTier, color_count: u32) -> Decimal {
    if color_count == 0 {
        return Decimal::ZERO;
    }
    let additional = Decimal::from(color_count - 1);
    add_or_keep(
        to_decimal(tier.first_color_price),
        mul_or_zero(additional, to_decimal(tier.additional_color_price)),
    )
}
