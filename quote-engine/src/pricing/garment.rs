//! Garment Base Cost Calculator
//!
//! Standard orders pay the caller-resolved unit price. Bring-in orders
//! (customer-supplied garments) pay a handling fee derived from the
//! garment's published list price, rounded up to the next 10.

use super::money::{mul_or_zero, round_currency, sum_amounts, to_decimal, to_f64};
use rust_decimal::prelude::*;
use shared::models::{ListPriceLookup, OrderLineItem, PricingTables};

const FEE_ROUNDING_UNIT: Decimal = Decimal::TEN;
/// Precision kept before ceiling, drops f64 conversion noise
const FEE_PRECISION: u32 = 10;

/// Handling fee per garment: ceil(list × rate / 10) × 10, never negative
pub fn bring_in_fee(list_price: Decimal, fee_rate: Decimal) -> Decimal {
    let raw = mul_or_zero(list_price, fee_rate).round_dp(FEE_PRECISION).max(Decimal::ZERO);
    mul_or_zero((raw / FEE_ROUNDING_UNIT).ceil(), FEE_ROUNDING_UNIT)
}

/// Garment cost of one line in bring-in mode; unresolved list price is zero
fn bring_in_line_cost(
    line: &OrderLineItem,
    fee_rate: Decimal,
    catalog: &dyn ListPriceLookup,
) -> Decimal {
    match catalog.list_price(&line.product_id, &line.color_name, &line.size_name) {
        Some(list_price) => {
            let fee = bring_in_fee(to_decimal(list_price), fee_rate);
            mul_or_zero(fee, Decimal::from(line.quantity))
        }
        None => {
            tracing::warn!(
                product_id = %line.product_id,
                color = %line.color_name,
                size = %line.size_name,
                "List price not found, bring-in fee counted as zero"
            );
            Decimal::ZERO
        }
    }
}

/// Total garment cost, rounded
pub fn calculate_garment_cost(
    lines: &[OrderLineItem],
    tables: &PricingTables,
    catalog: &dyn ListPriceLookup,
    is_bring_in: bool,
) -> Decimal {
    let total: Decimal = if is_bring_in {
        let fee_rate = to_decimal(tables.bring_in_fee_rate);
        sum_amounts(lines.iter().map(|line| bring_in_line_cost(line, fee_rate, catalog)))
    } else {
        sum_amounts(
            lines
                .iter()
                .map(|line| mul_or_zero(to_decimal(line.unit_price), Decimal::from(line.quantity))),
        )
    };

    round_currency(total)
}

/// Retail unit price from a list price and the brand's sell-through rate
///
/// Used by catalog loaders to pre-resolve `OrderLineItem::unit_price`.
/// Unknown brands sell at list price.
pub fn retail_unit_price(list_price: f64, brand: &str, tables: &PricingTables) -> f64 {
    let rate = tables
        .brand_rates
        .get(brand)
        .copied()
        .map(to_decimal)
        .unwrap_or(Decimal::ONE);
    to_f64(mul_or_zero(to_decimal(list_price), rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ColorCatalog;

    fn line(quantity: u32, unit_price: f64) -> OrderLineItem {
        OrderLineItem::new("5001", "t-shirt", quantity, unit_price).with_variant("White", "M")
    }

    #[test]
    fn test_standard_garment_cost() {
        let tables = PricingTables::default();
        let catalog = ColorCatalog::new();
        let lines = vec![line(10, 500.0), line(3, 1250.5)];

        let cost = calculate_garment_cost(&lines, &tables, &catalog, false);

        // 5000 + 3751.5
        assert_eq!(cost, Decimal::from(8752));
    }

    #[test]
    fn test_bring_in_fee_rounds_up_to_ten() {
        let rate = to_decimal(0.05);
        assert_eq!(bring_in_fee(Decimal::from(1200), rate), Decimal::from(60));
        assert_eq!(bring_in_fee(Decimal::from(1210), rate), Decimal::from(70));
        assert_eq!(bring_in_fee(Decimal::from(1), rate), Decimal::from(10));
        assert_eq!(bring_in_fee(Decimal::ZERO, rate), Decimal::ZERO);
        assert_eq!(bring_in_fee(Decimal::from(-500), rate), Decimal::ZERO);
    }

    #[test]
    fn test_bring_in_uses_list_price() {
        let tables = PricingTables {
            bring_in_fee_rate: 0.05,
            ..Default::default()
        };
        let catalog = ColorCatalog::new().with_price("5001", "White", "M", 1200.0);
        let lines = vec![line(10, 500.0)];

        let cost = calculate_garment_cost(&lines, &tables, &catalog, true);

        assert_eq!(cost, Decimal::from(600));
    }

    #[test]
    fn test_bring_in_unresolved_line_is_zero() {
        let tables = PricingTables {
            bring_in_fee_rate: 0.05,
            ..Default::default()
        };
        let catalog = ColorCatalog::new().with_price("5001", "White", "M", 1200.0);
        let lines = vec![
            line(10, 500.0),
            OrderLineItem::new("5001", "t-shirt", 4, 500.0).with_variant("Black", "XL"),
        ];

        let cost = calculate_garment_cost(&lines, &tables, &catalog, true);

        assert_eq!(cost, Decimal::from(600));
    }

    #[test]
    fn test_retail_unit_price() {
        let mut tables = PricingTables::default();
        tables.brand_rates.insert("United Athle".to_string(), 0.65);

        assert_eq!(retail_unit_price(1000.0, "United Athle", &tables), 650.0);
        assert_eq!(retail_unit_price(999.0, "United Athle", &tables), 649.0);
        assert_eq!(retail_unit_price(1000.0, "Unknown", &tables), 1000.0);
    }
}
