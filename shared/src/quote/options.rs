//! Pricing mode and calculation options

use serde::{Deserialize, Serialize};

/// Who the quote is priced for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricingMode {
    /// Ordinary retail order
    #[default]
    Standard,
    /// Admin / partner quoting: the whole order is one combined job
    Privileged {
        /// Replaces the group quantity for tier selection and the per-garment divisor
        #[serde(default, skip_serializing_if = "Option::is_none")]
        override_quantity: Option<u32>,
    },
}

impl PricingMode {
    pub fn is_privileged(&self) -> bool {
        matches!(self, PricingMode::Privileged { .. })
    }

    /// Positive override quantity, if any
    pub fn override_quantity(&self) -> Option<u32> {
        match self {
            PricingMode::Privileged {
                override_quantity: Some(q),
            } if *q > 0 => Some(*q),
            _ => None,
        }
    }
}

/// Options for one calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CostOptions {
    #[serde(default)]
    pub mode: PricingMode,
    /// Repeat print run: no setup (plate) cost
    #[serde(default)]
    pub is_reorder: bool,
    /// Customer-supplied garments: handling fee instead of garment price
    #[serde(default)]
    pub is_bring_in: bool,
}

impl CostOptions {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn privileged(override_quantity: Option<u32>) -> Self {
        Self {
            mode: PricingMode::Privileged { override_quantity },
            ..Self::default()
        }
    }

    pub fn reorder(mut self) -> Self {
        self.is_reorder = true;
        self
    }

    pub fn bring_in(mut self) -> Self {
        self.is_bring_in = true;
        self
    }
}
