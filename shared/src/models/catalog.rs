//! Brand Color Catalog
//!
//! Published list prices per product, color and size. Bring-in quotes are
//! derived from these instead of the caller-supplied unit price.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// List price lookup used by bring-in pricing
pub trait ListPriceLookup {
    fn list_price(&self, product_id: &str, color_name: &str, size_name: &str) -> Option<f64>;
}

/// In-memory catalog: product → color → size → list price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct ColorCatalog {
    products: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>,
}

impl ColorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        product_id: impl Into<String>,
        color_name: impl Into<String>,
        size_name: impl Into<String>,
        list_price: f64,
    ) {
        self.products
            .entry(product_id.into())
            .or_default()
            .entry(color_name.into())
            .or_default()
            .insert(size_name.into(), list_price);
    }

    pub fn with_price(
        mut self,
        product_id: impl Into<String>,
        color_name: impl Into<String>,
        size_name: impl Into<String>,
        list_price: f64,
    ) -> Self {
        self.insert(product_id, color_name, size_name, list_price);
        self
    }
}

impl ListPriceLookup for ColorCatalog {
    fn list_price(&self, product_id: &str, color_name: &str, size_name: &str) -> Option<f64> {
        self.products
            .get(product_id)?
            .get(color_name)?
            .get(size_name)
            .copied()
    }
}
