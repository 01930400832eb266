//! Shipping Cost Resolver
//!
//! Flat-rate zones matched by prefecture prefix of the delivery address,
//! with a free-shipping threshold on the pre-tax subtotal.

use super::money::{round_currency, to_decimal};
use rust_decimal::prelude::*;
use shared::models::{CustomerAddress, PricingTables, ShippingZone, DEFAULT_SHIPPING_ZONE};

/// Zone for an address line; `DEFAULT` when no prefecture prefix matches
///
/// Zones are tried in region-key order, so an address matching two zones
/// always resolves the same way.
pub fn resolve_shipping_zone<'a>(
    address: &str,
    tables: &'a PricingTables,
) -> Option<(&'a str, &'a ShippingZone)> {
    let address = address.trim_start();

    let matched = tables
        .shipping_zones
        .iter()
        .filter(|(region, _)| region.as_str() != DEFAULT_SHIPPING_ZONE)
        .find(|(_, zone)| {
            zone.prefectures
                .iter()
                .any(|pref| !pref.is_empty() && address.starts_with(pref.as_str()))
        });

    match matched {
        Some((region, zone)) => Some((region.as_str(), zone)),
        None => tables
            .default_shipping_zone()
            .map(|zone| (DEFAULT_SHIPPING_ZONE, zone)),
    }
}

/// Shipping cost for a pre-tax subtotal
///
/// Free at or above the threshold, and for empty orders (subtotal <= 0).
/// Zone costs are rounded to whole currency units.
pub fn calculate_shipping_cost(
    subtotal: Decimal,
    customer: &CustomerAddress,
    tables: &PricingTables,
) -> Decimal {
    if subtotal <= Decimal::ZERO || subtotal >= to_decimal(tables.free_shipping_threshold) {
        return Decimal::ZERO;
    }

    match resolve_shipping_zone(customer.delivery_address(), tables) {
        Some((region, zone)) => {
            tracing::debug!(region, cost = zone.cost, "Resolved shipping zone");
            round_currency(to_decimal(zone.cost))
        }
        None => {
            tracing::warn!("No shipping zone matched and no DEFAULT zone configured");
            Decimal::ZERO
        }
    }
}
