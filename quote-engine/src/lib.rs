//! Print-shop quote engine
//!
//! Turns ordered garments and print designs into an itemized, taxed price.
//!
//! # Module structure
//!
//! ```text
//! quote-engine/src/
//! ├── pricing/      # component calculators (grouping, tiers, surcharges, ...)
//! ├── quote/        # compute_cost entry point
//! ├── matrix.rs     # price matrix simulation
//! ├── validation.rs # optional input checks
//! ├── core/         # configuration
//! └── utils/        # logger, request files
//! ```
//!
//! # Example
//!
//! ```ignore
//! use quote_engine::compute_cost;
//! use shared::models::{ColorCatalog, CustomerAddress};
//! use shared::quote::CostOptions;
//!
//! let breakdown = compute_cost(
//!     &lines,
//!     &designs,
//!     &CustomerAddress::new("東京都渋谷区"),
//!     &tables,
//!     &ColorCatalog::new(),
//!     &CostOptions::standard(),
//! );
//! println!("{}", breakdown.total_with_tax);
//! ```

pub mod core;
pub mod matrix;
pub mod pricing;
pub mod quote;
pub mod utils;
pub mod validation;

// Re-exports
pub use crate::core::Config;
pub use matrix::simulate_price_matrix;
pub use quote::{compute_cost, compute_request};
pub use validation::{
    validate_order_lines, validate_pricing_tables, validate_print_designs, validate_request,
};
