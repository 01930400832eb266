//! Order Line Model

use serde::{Deserialize, Serialize};

/// One ordered garment variant (product × color × size)
///
/// `unit_price` is already resolved from the catalog by the caller; the
/// engine only looks prices up itself in bring-in mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: String,
    pub name: String,
    /// Product category, input to both grouping dimensions
    pub category_id: String,
    /// Product tags (per-item surcharges are keyed by tag)
    #[serde(default)]
    pub tags: Vec<String>,
    pub color_name: String,
    pub size_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLineItem {
    pub fn new(
        product_id: impl Into<String>,
        category_id: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        let product_id = product_id.into();
        Self {
            name: product_id.clone(),
            product_id,
            category_id: category_id.into(),
            tags: vec![],
            color_name: String::new(),
            size_name: String::new(),
            quantity,
            unit_price,
        }
    }

    pub fn with_variant(mut self, color: impl Into<String>, size: impl Into<String>) -> Self {
        self.color_name = color.into();
        self.size_name = size.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Total ordered quantity across all lines
pub fn total_quantity(lines: &[OrderLineItem]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity)).sum()
}
