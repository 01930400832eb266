//! Quote cost calculation
//!
//! `compute_cost` is the single entry point used for live quoting, price
//! matrix simulation and regeneration of archived quotes. It is pure: it
//! reads its arguments, never touches a clock or shared state, and builds a
//! fresh `CostBreakdown` every call. Missing table entries and amounts too
//! large for `Decimal` degrade to zero (with a warning) instead of failing.
//!
//! # Calculation Steps
//! 1. Group lines (print-cost groups, plate-cost group count)
//! 2. Garment cost (unit prices, or bring-in handling fees)
//! 3. Setup cost (skipped for reorders)
//! 4. Print cost per group, sub-totals rounded individually
//! 5. Shipping on the pre-tax subtotal
//! 6. Tax, total, per-garment cost

use crate::pricing::{
    calculate_garment_cost, calculate_print_cost, calculate_setup_cost, calculate_shipping_cost,
    calculate_tax, cost_per_garment, effective_plate_group_count, resolve_print_groups, sum_amounts,
    to_f64, to_f64_exact,
};
use shared::models::{
    total_quantity, CustomerAddress, ListPriceLookup, OrderLineItem, PricingTables, PrintDesign,
};
use shared::quote::{CostBreakdown, CostOptions, QuoteRequest};

/// Compute the itemized, taxed cost of an order
pub fn compute_cost(
    order_lines: &[OrderLineItem],
    print_designs: &[PrintDesign],
    customer: &CustomerAddress,
    pricing: &PricingTables,
    catalog: &dyn ListPriceLookup,
    options: &CostOptions,
) -> CostBreakdown {
    if order_lines.is_empty() && print_designs.is_empty() {
        return CostBreakdown::default();
    }

    let mode = &options.mode;

    // Step 1: grouping
    let print_groups = resolve_print_groups(order_lines, pricing, mode);
    let plate_group_count = effective_plate_group_count(order_lines, pricing, mode);

    // Step 2-4: sub-costs, each already rounded
    let garment_cost = calculate_garment_cost(order_lines, pricing, catalog, options.is_bring_in);
    let setup = calculate_setup_cost(print_designs, pricing, plate_group_count, options.is_reorder);
    let print = calculate_print_cost(&print_groups, print_designs, pricing, mode);
    let print_cost = print.total();

    let subtotal = sum_amounts([garment_cost, setup.total, print_cost]);

    // Step 5: shipping
    let shipping_cost = calculate_shipping_cost(subtotal, customer, pricing);

    // Step 6: tax and totals
    let tax = calculate_tax(subtotal, shipping_cost);
    let total_with_tax = sum_amounts([subtotal, shipping_cost, tax]);

    let effective_quantity = mode
        .override_quantity()
        .map(u64::from)
        .unwrap_or_else(|| total_quantity(order_lines));
    let per_garment = cost_per_garment(total_with_tax, effective_quantity);

    tracing::debug!(
        lines = order_lines.len(),
        designs = print_designs.len(),
        print_groups = print_groups.len(),
        plate_groups = plate_group_count,
        subtotal = %subtotal,
        shipping = %shipping_cost,
        tax = %tax,
        total = %total_with_tax,
        "Quote computed"
    );

    CostBreakdown {
        subtotal: to_f64(subtotal),
        shipping_cost: to_f64(shipping_cost),
        tax: to_f64(tax),
        total_with_tax: to_f64(total_with_tax),
        cost_per_garment: to_f64_exact(per_garment),
        garment_cost: to_f64(garment_cost),
        setup_cost: to_f64(setup.total),
        print_cost: to_f64(print_cost),
        print_cost_detail: print.to_detail(),
        setup_cost_by_design: setup
            .by_design
            .into_iter()
            .map(|(id, cost)| (id, to_f64(cost)))
            .collect(),
        print_group_count: print_groups.len(),
        plate_group_count,
    }
}

/// Compute the cost of an archived or submitted request
pub fn compute_request(request: &QuoteRequest) -> CostBreakdown {
    compute_cost(
        &request.order_lines,
        &request.print_designs,
        &request.customer,
        &request.pricing,
        &request.catalog,
        &request.options,
    )
}
