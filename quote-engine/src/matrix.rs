//! Price Matrix Simulator
//!
//! Runs the quote engine over a grid of quantities × color counts using one
//! template line and one template design. Each cell is priced as a
//! privileged quote with the cell quantity as override, so the tier follows
//! the simulated quantity exactly.

use crate::pricing::{to_decimal, to_f64};
use crate::quote::compute_cost;
use shared::models::{CustomerAddress, ListPriceLookup, OrderLineItem, PricingTables, PrintDesign};
use shared::quote::{CostOptions, PriceMatrix, PriceMatrixCell, PricingMode};

/// Simulated price grid for the storefront price table
///
/// Reorder and bring-in flags of `options` are kept; the mode is replaced
/// per cell. Zero quantities are skipped.
#[allow(clippy::too_many_arguments)]
pub fn simulate_price_matrix(
    template_line: &OrderLineItem,
    template_design: &PrintDesign,
    customer: &CustomerAddress,
    pricing: &PricingTables,
    catalog: &dyn ListPriceLookup,
    quantities: &[u32],
    max_colors: u32,
    options: &CostOptions,
) -> PriceMatrix {
    let mut quantities: Vec<u32> = quantities.iter().copied().filter(|q| *q > 0).collect();
    quantities.sort_unstable();
    quantities.dedup();

    let mut cells = Vec::with_capacity(quantities.len() * max_colors as usize);

    for quantity in quantities {
        let line = OrderLineItem {
            quantity,
            ..template_line.clone()
        };
        let cell_options = CostOptions {
            mode: PricingMode::Privileged {
                override_quantity: Some(quantity),
            },
            ..*options
        };

        for color_count in 1..=max_colors {
            let design = PrintDesign {
                color_count,
                ..template_design.clone()
            };
            let breakdown = compute_cost(
                std::slice::from_ref(&line),
                std::slice::from_ref(&design),
                customer,
                pricing,
                catalog,
                &cell_options,
            );

            cells.push(PriceMatrixCell {
                quantity,
                color_count,
                cost_per_garment: to_f64(to_decimal(breakdown.cost_per_garment)),
                total_with_tax: breakdown.total_with_tax,
            });
        }
    }

    tracing::debug!(cells = cells.len(), "Price matrix simulated");

    PriceMatrix { cells }
}
