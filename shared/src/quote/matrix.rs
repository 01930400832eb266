//! Price Matrix
//!
//! Per-garment prices over a grid of quantities and color counts, shown as
//! the static price table on the storefront.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceMatrixCell {
    pub quantity: u32,
    pub color_count: u32,
    /// Tax-inclusive price per garment, whole currency units
    pub cost_per_garment: f64,
    pub total_with_tax: f64,
}

/// Cells ordered by quantity, then color count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceMatrix {
    pub cells: Vec<PriceMatrixCell>,
}

impl PriceMatrix {
    pub fn get(&self, quantity: u32, color_count: u32) -> Option<&PriceMatrixCell> {
        self.cells
            .iter()
            .find(|c| c.quantity == quantity && c.color_count == color_count)
    }

    /// One row per quantity
    pub fn rows(&self) -> Vec<(u32, Vec<&PriceMatrixCell>)> {
        let mut rows: Vec<(u32, Vec<&PriceMatrixCell>)> = Vec::new();
        for cell in &self.cells {
            match rows.last_mut() {
                Some((q, row)) if *q == cell.quantity => row.push(cell),
                _ => rows.push((cell.quantity, vec![cell])),
            }
        }
        rows
    }
}
