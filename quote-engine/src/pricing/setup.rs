//! Setup (Plate) Cost Calculator
//!
//! One-time plate charge per active design:
//! plate cost × colors × plate group count. Reorders reuse existing plates
//! and are never billed for setup.

use super::money::{add_or_keep, mul_or_zero, round_currency, sum_amounts, to_decimal};
use rust_decimal::prelude::*;
use shared::models::{PricingTables, PrintDesign};
use std::collections::BTreeMap;

/// Setup cost per design and in total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupCost {
    pub total: Decimal,
    pub by_design: BTreeMap<String, Decimal>,
}

/// Unrounded plate cost of one design
pub fn design_setup_cost(
    design: &PrintDesign,
    tables: &PricingTables,
    plate_group_count: usize,
) -> Decimal {
    match tables.plate_cost(design.size, design.plate_type) {
        Some(plate) => {
            let per_color = mul_or_zero(to_decimal(plate.cost), Decimal::from(design.color_count));
            mul_or_zero(per_color, Decimal::from(plate_group_count))
        }
        None => {
            tracing::warn!(
                design_id = %design.id,
                size = %design.size,
                plate_type = %design.plate_type,
                "Plate cost not configured, setup cost counted as zero"
            );
            Decimal::ZERO
        }
    }
}

/// Setup cost of all active designs; the total is the sum of the rounded
/// per-design costs
pub fn calculate_setup_cost(
    designs: &[PrintDesign],
    tables: &PricingTables,
    plate_group_count: usize,
    is_reorder: bool,
) -> SetupCost {
    if is_reorder {
        return SetupCost::default();
    }

    let mut by_design: BTreeMap<String, Decimal> = BTreeMap::new();
    for design in designs.iter().filter(|d| d.is_active()) {
        let cost = round_currency(design_setup_cost(design, tables, plate_group_count));
        let entry = by_design.entry(design.id.clone()).or_default();
        *entry = add_or_keep(*entry, cost);
    }

    SetupCost {
        total: sum_amounts(by_design.values().copied()),
        by_design,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PlateCost, PlateType, PrintSize};

    fn tables() -> PricingTables {
        PricingTables {
            plate_costs: vec![
                PlateCost {
                    size: PrintSize::S10x10,
                    plate_type: PlateType::Normal,
                    cost: 2500.0,
                    surcharge_per_color: 0.0,
                },
                PlateCost {
                    size: PrintSize::S30x40,
                    plate_type: PlateType::Decomposition,
                    cost: 6000.0,
                    surcharge_per_color: 15.0,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_setup_per_design() {
        let designs = vec![
            PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 2),
            PrintDesign::new("back", "back", PrintSize::S30x40, 3)
                .with_plate_type(PlateType::Decomposition),
        ];

        let setup = calculate_setup_cost(&designs, &tables(), 1, false);

        assert_eq!(setup.by_design["front"], Decimal::from(5_000));
        assert_eq!(setup.by_design["back"], Decimal::from(18_000));
        assert_eq!(setup.total, Decimal::from(23_000));
    }

    #[test]
    fn test_setup_scales_with_plate_groups() {
        let designs = vec![PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 2)];
        let setup = calculate_setup_cost(&designs, &tables(), 3, false);
        assert_eq!(setup.total, Decimal::from(15_000));
    }

    #[test]
    fn test_reorder_skips_setup() {
        let designs = vec![PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 2)];
        let setup = calculate_setup_cost(&designs, &tables(), 2, true);
        assert_eq!(setup.total, Decimal::ZERO);
        assert!(setup.by_design.is_empty());
    }

    #[test]
    fn test_inactive_and_unpriced_designs() {
        let designs = vec![
            PrintDesign::new("unused", "", PrintSize::S10x10, 2),
            PrintDesign::new("blank", "back", PrintSize::S10x10, 0),
            PrintDesign::new("unpriced", "back", PrintSize::S35x50, 2),
        ];

        let setup = calculate_setup_cost(&designs, &tables(), 1, false);

        assert!(!setup.by_design.contains_key("unused"));
        assert!(!setup.by_design.contains_key("blank"));
        assert_eq!(setup.by_design["unpriced"], Decimal::ZERO);
        assert_eq!(setup.total, Decimal::ZERO);
    }
}
