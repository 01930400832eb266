//! Pricing Table Model
//!
//! Read-only snapshot of every rate table consulted by one quote calculation.
//! Loaded once per session by the data service and passed by reference.
//! Ordered maps keep iteration (and therefore every derived value) stable.

use super::print_design::{PlateType, PrintSize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Region key used when no prefecture prefix matches
pub const DEFAULT_SHIPPING_ZONE: &str = "DEFAULT";

/// Quantity bracket with its own unit prices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuantityTier {
    pub min: u32,
    pub max: u32,
    pub first_color_price: f64,
    pub additional_color_price: f64,
}

impl QuantityTier {
    pub fn contains(&self, quantity: u64) -> bool {
        u64::from(self.min) <= quantity && quantity <= u64::from(self.max)
    }
}

/// Plate cost entry for one (size, plate type) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlateCost {
    pub size: PrintSize,
    pub plate_type: PlateType,
    /// One-time cost per color
    pub cost: f64,
    /// Per-unit print surcharge per color
    #[serde(default)]
    pub surcharge_per_color: f64,
}

/// Flat-rate shipping zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingZone {
    pub cost: f64,
    /// Prefecture names matched as address prefixes
    #[serde(default)]
    pub prefectures: Vec<String>,
}

/// All rate tables for one calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PricingTables {
    /// Brand → sell-through multiplier (list price to retail price)
    #[serde(default)]
    pub brand_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub plate_costs: Vec<PlateCost>,
    #[serde(default)]
    pub special_ink_costs: BTreeMap<String, f64>,
    #[serde(default)]
    pub size_surcharges: BTreeMap<PrintSize, f64>,
    #[serde(default)]
    pub location_surcharges: BTreeMap<String, f64>,
    #[serde(default)]
    pub tag_surcharges: BTreeMap<String, f64>,
    /// Ascending, non-overlapping
    #[serde(default)]
    pub tiers: Vec<QuantityTier>,
    #[serde(default)]
    pub shipping_zones: BTreeMap<String, ShippingZone>,
    #[serde(default)]
    pub free_shipping_threshold: f64,
    #[serde(default)]
    pub bring_in_fee_rate: f64,
    /// Category → print-cost group override
    #[serde(default)]
    pub print_group_combinations: BTreeMap<String, String>,
    /// Category → plate-cost group override
    #[serde(default)]
    pub plate_group_combinations: BTreeMap<String, String>,
}

impl PricingTables {
    pub fn plate_cost(&self, size: PrintSize, plate_type: PlateType) -> Option<&PlateCost> {
        self.plate_costs
            .iter()
            .find(|p| p.size == size && p.plate_type == plate_type)
    }

    pub fn default_shipping_zone(&self) -> Option<&ShippingZone> {
        self.shipping_zones.get(DEFAULT_SHIPPING_ZONE)
    }
}
