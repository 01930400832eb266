//! Data models
//!
//! Value types consumed by the quote engine. Shared between the engine, the
//! data-loading service and the storefront (via JSON).

pub mod catalog;
pub mod customer;
pub mod order_line;
pub mod pricing_table;
pub mod print_design;

// Re-exports
pub use catalog::*;
pub use customer::*;
pub use order_line::*;
pub use pricing_table::*;
pub use print_design::*;
