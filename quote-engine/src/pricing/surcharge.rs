//! Print Cost & Surcharge Accumulator
//!
//! Per print group and active design:
//! - base: tier unit price × group quantity
//! - size / location / special ink: per-unit surcharge × group quantity
//! - item (tag): Σ line tag surcharges × that line's own quantity
//! - plate type: surcharge per color × colors × group quantity
//!
//! Each sub-total is rounded on its own; the print cost is the sum of the
//! rounded sub-totals.

use super::grouping::PrintGroup;
use super::money::{add_or_keep, mul_or_zero, round_currency, sum_amounts, to_decimal, to_f64};
use super::tier::{find_tier, unit_print_price};
use rust_decimal::prelude::*;
use shared::models::{OrderLineItem, PricingTables, PrintDesign};
use shared::quote::{PricingMode, PrintCostDetail};

/// Unrounded print cost sub-totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintCostTotals {
    pub base: Decimal,
    pub by_item: Decimal,
    pub by_size: Decimal,
    pub by_ink: Decimal,
    pub by_location: Decimal,
    pub by_plate_type: Decimal,
}

impl PrintCostTotals {
    /// Round every sub-total independently
    pub fn rounded(&self) -> Self {
        Self {
            base: round_currency(self.base),
            by_item: round_currency(self.by_item),
            by_size: round_currency(self.by_size),
            by_ink: round_currency(self.by_ink),
            by_location: round_currency(self.by_location),
            by_plate_type: round_currency(self.by_plate_type),
        }
    }

    pub fn total(&self) -> Decimal {
        sum_amounts([
            self.base,
            self.by_item,
            self.by_size,
            self.by_ink,
            self.by_location,
            self.by_plate_type,
        ])
    }

    pub fn to_detail(&self) -> PrintCostDetail {
        PrintCostDetail {
            base: to_f64(self.base),
            by_item: to_f64(self.by_item),
            by_size: to_f64(self.by_size),
            by_ink: to_f64(self.by_ink),
            by_location: to_f64(self.by_location),
            by_plate_type: to_f64(self.by_plate_type),
        }
    }
}

/// Per-unit size surcharge (absent entry = no surcharge)
pub fn size_surcharge(design: &PrintDesign, tables: &PricingTables) -> Decimal {
    tables
        .size_surcharges
        .get(&design.size)
        .copied()
        .map(to_decimal)
        .unwrap_or_default()
}

/// Per-unit location surcharge (absent entry = no surcharge)
pub fn location_surcharge(design: &PrintDesign, tables: &PricingTables) -> Decimal {
    tables
        .location_surcharges
        .get(design.location.trim())
        .copied()
        .map(to_decimal)
        .unwrap_or_default()
}

/// Per-unit cost of all special inks on a design
pub fn special_ink_surcharge(design: &PrintDesign, tables: &PricingTables) -> Decimal {
    design
        .special_inks
        .iter()
        .map(|ink| match tables.special_ink_costs.get(&ink.ink_type) {
            Some(cost) => mul_or_zero(to_decimal(*cost), Decimal::from(ink.count)),
            None => {
                tracing::warn!(
                    design_id = %design.id,
                    ink_type = %ink.ink_type,
                    "Special ink has no cost entry, pricing it at zero"
                );
                Decimal::ZERO
            }
        })
        .fold(Decimal::ZERO, add_or_keep)
}

/// Per-unit tag surcharge of one line (sum over its tags)
pub fn tag_surcharge(line: &OrderLineItem, tables: &PricingTables) -> Decimal {
    line.tags
        .iter()
        .filter_map(|tag| tables.tag_surcharges.get(tag))
        .map(|amount| to_decimal(*amount))
        .fold(Decimal::ZERO, add_or_keep)
}

/// Per-unit plate-type surcharge for a design
pub fn plate_type_surcharge(design: &PrintDesign, tables: &PricingTables) -> Decimal {
    tables
        .plate_cost(design.size, design.plate_type)
        .map(|plate| {
            mul_or_zero(to_decimal(plate.surcharge_per_color), Decimal::from(design.color_count))
        })
        .unwrap_or_default()
}

/// Accumulate one group's print cost into `totals`
///
/// `tier_quantity` selects the bracket; scaling always uses real quantities.
fn accumulate_group(
    totals: &mut PrintCostTotals,
    group: &PrintGroup<'_>,
    designs: &[PrintDesign],
    tables: &PricingTables,
    tier_quantity: u64,
) {
    if group.quantity == 0 {
        return;
    }

    let Some(tier) = find_tier(tier_quantity, &tables.tiers) else {
        tracing::warn!(
            group = %group.id,
            quantity = tier_quantity,
            "No quantity tier matches, group contributes no print cost"
        );
        return;
    };

    let group_quantity = Decimal::from(group.quantity);

    for design in designs.iter().filter(|d| d.is_active()) {
        let per_group = |unit: Decimal| mul_or_zero(unit, group_quantity);

        totals.base = add_or_keep(totals.base, per_group(unit_print_price(tier, design.color_count)));
        totals.by_size = add_or_keep(totals.by_size, per_group(size_surcharge(design, tables)));
        totals.by_location =
            add_or_keep(totals.by_location, per_group(location_surcharge(design, tables)));
        totals.by_ink = add_or_keep(totals.by_ink, per_group(special_ink_surcharge(design, tables)));
        totals.by_plate_type =
            add_or_keep(totals.by_plate_type, per_group(plate_type_surcharge(design, tables)));

        let by_item = sum_amounts(
            group
                .lines
                .iter()
                .map(|line| mul_or_zero(tag_surcharge(line, tables), Decimal::from(line.quantity))),
        );
        totals.by_item = add_or_keep(totals.by_item, by_item);
    }
}

/// Print cost of all groups, each sub-total rounded
pub fn calculate_print_cost(
    groups: &[PrintGroup<'_>],
    designs: &[PrintDesign],
    tables: &PricingTables,
    mode: &PricingMode,
) -> PrintCostTotals {
    let mut totals = PrintCostTotals::default();

    for group in groups {
        let tier_quantity = mode
            .override_quantity()
            .map(u64::from)
            .unwrap_or(group.quantity);
        accumulate_group(&mut totals, group, designs, tables, tier_quantity);
    }

    totals.rounded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::grouping::resolve_print_groups;
    use shared::models::{PlateCost, PlateType, PrintSize, QuantityTier};

    fn tables() -> PricingTables {
        let mut tables = PricingTables {
            tiers: vec![
                QuantityTier {
                    min: 1,
                    max: 49,
                    first_color_price: 800.0,
                    additional_color_price: 200.0,
                },
                QuantityTier {
                    min: 50,
                    max: 99,
                    first_color_price: 600.0,
                    additional_color_price: 150.0,
                },
            ],
            plate_costs: vec![PlateCost {
                size: PrintSize::S30x40,
                plate_type: PlateType::Decomposition,
                cost: 6000.0,
                surcharge_per_color: 15.0,
            }],
            ..Default::default()
        };
        tables.size_surcharges.insert(PrintSize::S30x40, 50.0);
        tables.location_surcharges.insert("sleeve".to_string(), 30.0);
        tables.special_ink_costs.insert("glitter".to_string(), 120.0);
        tables.tag_surcharges.insert("dry".to_string(), 40.0);
        tables.tag_surcharges.insert("big".to_string(), 25.5);
        tables
    }

    #[test]
    fn test_base_only() {
        let tables = tables();
        let lines = vec![OrderLineItem::new("p1", "t-shirt", 10, 500.0)];
        let designs = vec![PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 2)];
        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);

        let totals = calculate_print_cost(&groups, &designs, &tables, &PricingMode::Standard);

        assert_eq!(totals.base, Decimal::from(10_000));
        assert_eq!(totals.total(), Decimal::from(10_000));
    }

    #[test]
    fn test_all_surcharges() {
        let tables = tables();
        let lines = vec![
            OrderLineItem::new("p1", "t-shirt", 6, 500.0).with_tags(["dry"]),
            OrderLineItem::new("p2", "t-shirt", 4, 500.0).with_tags(["dry", "big"]),
        ];
        let designs = vec![
            PrintDesign::new("back", "sleeve", PrintSize::S30x40, 3)
                .with_plate_type(PlateType::Decomposition)
                .with_ink("glitter", 2),
        ];
        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);

        let totals = calculate_print_cost(&groups, &designs, &tables, &PricingMode::Standard);

        // (800 + 2×200) × 10
        assert_eq!(totals.base, Decimal::from(12_000));
        assert_eq!(totals.by_size, Decimal::from(500));
        assert_eq!(totals.by_location, Decimal::from(300));
        // 120 × 2 inks × 10
        assert_eq!(totals.by_ink, Decimal::from(2_400));
        // 15 × 3 colors × 10
        assert_eq!(totals.by_plate_type, Decimal::from(450));
        // 40 × 6 + 65.5 × 4 = 240 + 262
        assert_eq!(totals.by_item, Decimal::from(502));
    }

    #[test]
    fn test_groups_priced_separately() {
        let tables = tables();
        // 30 + 30 = 60 combined would hit the 50+ tier, separately both stay in 1-49
        let lines = vec![
            OrderLineItem::new("p1", "t-shirt", 30, 500.0),
            OrderLineItem::new("p2", "polo", 30, 900.0),
        ];
        let designs = vec![PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 1)];

        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);
        let separate = calculate_print_cost(&groups, &designs, &tables, &PricingMode::Standard);
        assert_eq!(separate.base, Decimal::from(48_000));

        let privileged = PricingMode::Privileged {
            override_quantity: None,
        };
        let groups = resolve_print_groups(&lines, &tables, &privileged);
        let combined = calculate_print_cost(&groups, &designs, &tables, &privileged);
        assert_eq!(combined.base, Decimal::from(36_000));
    }

    #[test]
    fn test_override_quantity_selects_tier_only() {
        let tables = tables();
        let lines = vec![OrderLineItem::new("p1", "t-shirt", 10, 500.0)];
        let designs = vec![PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 1)];
        let mode = PricingMode::Privileged {
            override_quantity: Some(60),
        };
        let groups = resolve_print_groups(&lines, &tables, &mode);

        let totals = calculate_print_cost(&groups, &designs, &tables, &mode);

        // 50-99 tier price, scaled by the real 10 garments
        assert_eq!(totals.base, Decimal::from(6_000));
    }

    #[test]
    fn test_no_tier_zeroes_whole_group() {
        let tables = tables();
        let lines = vec![OrderLineItem::new("p1", "t-shirt", 150, 500.0).with_tags(["dry"])];
        let designs = vec![PrintDesign::new("back", "sleeve", PrintSize::S30x40, 2)];
        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);

        let totals = calculate_print_cost(&groups, &designs, &tables, &PricingMode::Standard);

        assert_eq!(totals, PrintCostTotals::default());
    }

    #[test]
    fn test_inactive_designs_are_free() {
        let tables = tables();
        let lines = vec![OrderLineItem::new("p1", "t-shirt", 10, 500.0)];
        let designs = vec![
            PrintDesign::new("empty", "", PrintSize::S30x40, 3),
            PrintDesign::new("zero", "sleeve", PrintSize::S30x40, 0).with_ink("glitter", 1),
        ];
        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);

        let totals = calculate_print_cost(&groups, &designs, &tables, &PricingMode::Standard);

        assert_eq!(totals.total(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_ink_costs_nothing() {
        let tables = tables();
        let design = PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 1)
            .with_ink("neon", 1)
            .with_ink("glitter", 1);
        assert_eq!(special_ink_surcharge(&design, &tables), Decimal::from(120));
    }

    #[test]
    fn test_sub_totals_rounded_independently() {
        let mut tables = tables();
        tables.tag_surcharges.insert("half".to_string(), 0.5);
        tables
            .location_surcharges
            .insert("frontCenter".to_string(), 0.5);
        let lines = vec![OrderLineItem::new("p1", "t-shirt", 1, 500.0).with_tags(["half"])];
        let designs = vec![PrintDesign::new("front", "frontCenter", PrintSize::S10x10, 1)];
        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);

        let totals = calculate_print_cost(&groups, &designs, &tables, &PricingMode::Standard);

        // 0.5 and 0.5 each round up to 1: print cost is 800 + 1 + 1, not 800 + round(1.0)
        assert_eq!(totals.by_item, Decimal::ONE);
        assert_eq!(totals.by_location, Decimal::ONE);
        assert_eq!(totals.total(), Decimal::from(802));
    }
}
