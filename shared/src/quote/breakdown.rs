//! Cost Breakdown
//!
//! Output of the quote engine. Every monetary field is a whole currency
//! amount except `cost_per_garment`, which keeps full precision so that
//! multiplying it back by the quantity reproduces the total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Print cost split by cause, for the cost summary UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PrintCostDetail {
    pub base: f64,
    /// Per-item tag surcharges
    pub by_item: f64,
    pub by_size: f64,
    pub by_ink: f64,
    pub by_location: f64,
    pub by_plate_type: f64,
}

impl PrintCostDetail {
    pub fn total(&self) -> f64 {
        self.base + self.by_item + self.by_size + self.by_ink + self.by_location + self.by_plate_type
    }
}

/// Result of one quote calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CostBreakdown {
    /// garment_cost + setup_cost + print_cost
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub total_with_tax: f64,
    pub cost_per_garment: f64,
    pub garment_cost: f64,
    pub setup_cost: f64,
    pub print_cost: f64,
    pub print_cost_detail: PrintCostDetail,
    pub setup_cost_by_design: BTreeMap<String, f64>,
    /// Number of print-cost groups priced as separate runs
    pub print_group_count: usize,
    /// Multiplier applied to plate costs
    pub plate_group_count: usize,
}

impl CostBreakdown {
    /// True when every monetary field is zero; group counts are not checked
    pub fn is_zero(&self) -> bool {
        self.subtotal == 0.0
            && self.shipping_cost == 0.0
            && self.tax == 0.0
            && self.total_with_tax == 0.0
            && self.cost_per_garment == 0.0
            && self.garment_cost == 0.0
            && self.setup_cost == 0.0
            && self.print_cost == 0.0
            && self.print_cost_detail == PrintCostDetail::default()
            && self.setup_cost_by_design.values().all(|c| *c == 0.0)
    }
}
