//! Grouping Resolver
//!
//! Order lines are grouped twice, independently:
//! - print-cost groups share one print run (one tier lookup)
//! - plate-cost groups each need their own set of plates
//!
//! Both use a category → group override map and fall back to the category
//! id. Under privileged pricing the whole order is one combined job.

use shared::models::{OrderLineItem, PricingTables};
use shared::quote::PricingMode;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Group id used when privileged pricing merges every line
pub const COMBINED_GROUP: &str = "combined";

/// Print-cost group identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrintGroupId(String);

/// Plate-cost group identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlateGroupId(String);

impl PrintGroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PlateGroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrintGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PlateGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Print-cost group of a category
pub fn print_group_for(category_id: &str, tables: &PricingTables) -> PrintGroupId {
    let id = tables
        .print_group_combinations
        .get(category_id)
        .map(String::as_str)
        .unwrap_or(category_id);
    PrintGroupId(id.to_string())
}

/// Plate-cost group of a category
pub fn plate_group_for(category_id: &str, tables: &PricingTables) -> PlateGroupId {
    let id = tables
        .plate_group_combinations
        .get(category_id)
        .map(String::as_str)
        .unwrap_or(category_id);
    PlateGroupId(id.to_string())
}

/// Lines priced together as one print run
#[derive(Debug, Clone)]
pub struct PrintGroup<'a> {
    pub id: PrintGroupId,
    pub lines: Vec<&'a OrderLineItem>,
    /// Combined quantity of all lines in the group
    pub quantity: u64,
}

impl<'a> PrintGroup<'a> {
    fn new(id: PrintGroupId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            quantity: 0,
        }
    }

    fn push(&mut self, line: &'a OrderLineItem) {
        self.quantity += u64::from(line.quantity);
        self.lines.push(line);
    }
}

/// Partition order lines into print-cost groups, ordered by group id
pub fn resolve_print_groups<'a>(
    lines: &'a [OrderLineItem],
    tables: &PricingTables,
    mode: &PricingMode,
) -> Vec<PrintGroup<'a>> {
    if lines.is_empty() {
        return vec![];
    }

    if mode.is_privileged() {
        let mut group = PrintGroup::new(PrintGroupId(COMBINED_GROUP.to_string()));
        for line in lines {
            group.push(line);
        }
        return vec![group];
    }

    let mut groups: BTreeMap<PrintGroupId, PrintGroup<'a>> = BTreeMap::new();
    for line in lines {
        let id = print_group_for(&line.category_id, tables);
        groups
            .entry(id.clone())
            .or_insert_with(|| PrintGroup::new(id))
            .push(line);
    }

    tracing::debug!(
        groups = groups.len(),
        lines = lines.len(),
        "Resolved print-cost groups"
    );

    groups.into_values().collect()
}

/// Distinct plate-cost groups across all lines
pub fn resolve_plate_groups(lines: &[OrderLineItem], tables: &PricingTables) -> BTreeSet<PlateGroupId> {
    lines
        .iter()
        .map(|line| plate_group_for(&line.category_id, tables))
        .collect()
}

/// Plate cost multiplier: 1 under privileged pricing, else the number of
/// distinct plate groups (never less than 1)
pub fn effective_plate_group_count(
    lines: &[OrderLineItem],
    tables: &PricingTables,
    mode: &PricingMode,
) -> usize {
    if mode.is_privileged() {
        return 1;
    }
    resolve_plate_groups(lines, tables).len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> PricingTables {
        let mut tables = PricingTables::default();
        tables
            .print_group_combinations
            .insert("long-sleeve".to_string(), "t-shirt".to_string());
        tables
            .plate_group_combinations
            .insert("hoodie".to_string(), "sweat".to_string());
        tables
    }

    fn line(category: &str, quantity: u32) -> OrderLineItem {
        OrderLineItem::new("p", category, quantity, 500.0)
    }

    #[test]
    fn test_group_override_and_fallback() {
        let tables = tables();
        assert_eq!(print_group_for("long-sleeve", &tables).as_str(), "t-shirt");
        assert_eq!(print_group_for("polo", &tables).as_str(), "polo");
        assert_eq!(plate_group_for("hoodie", &tables).as_str(), "sweat");
        // the two maps are independent
        assert_eq!(plate_group_for("long-sleeve", &tables).as_str(), "long-sleeve");
        assert_eq!(print_group_for("hoodie", &tables).as_str(), "hoodie");
    }

    #[test]
    fn test_print_groups_sum_quantities() {
        let tables = tables();
        let lines = vec![line("t-shirt", 10), line("long-sleeve", 5), line("hoodie", 3)];

        let groups = resolve_print_groups(&lines, &tables, &PricingMode::Standard);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id.as_str(), "hoodie");
        assert_eq!(groups[0].quantity, 3);
        assert_eq!(groups[1].id.as_str(), "t-shirt");
        assert_eq!(groups[1].quantity, 15);
        assert_eq!(groups[1].lines.len(), 2);
    }

    #[test]
    fn test_privileged_combines_everything() {
        let tables = tables();
        let lines = vec![line("t-shirt", 10), line("polo", 5), line("hoodie", 3)];
        let mode = PricingMode::Privileged {
            override_quantity: None,
        };

        let groups = resolve_print_groups(&lines, &tables, &mode);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id.as_str(), COMBINED_GROUP);
        assert_eq!(groups[0].quantity, 18);

        assert_eq!(effective_plate_group_count(&lines, &tables, &mode), 1);
    }

    #[test]
    fn test_plate_group_count() {
        let tables = tables();
        let lines = vec![line("hoodie", 1), line("sweat", 1), line("t-shirt", 1)];
        assert_eq!(
            effective_plate_group_count(&lines, &tables, &PricingMode::Standard),
            2
        );
        assert_eq!(effective_plate_group_count(&[], &tables, &PricingMode::Standard), 1);
    }

    #[test]
    fn test_no_lines_no_groups() {
        let groups = resolve_print_groups(&[], &tables(), &PricingMode::Standard);
        assert!(groups.is_empty());
    }
}
