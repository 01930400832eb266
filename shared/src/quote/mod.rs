//! Quote Module
//!
//! Types exchanged with the quote engine:
//! - Options: pricing mode and orthogonal reorder/bring-in flags
//! - Breakdown: itemized, taxed result of one calculation
//! - Request: archived input envelope, replayable at any time
//! - Matrix: per-garment price grid produced by simulation

pub mod breakdown;
pub mod matrix;
pub mod options;
pub mod request;

// Re-exports
pub use breakdown::{CostBreakdown, PrintCostDetail};
pub use matrix::{PriceMatrix, PriceMatrixCell};
pub use options::{CostOptions, PricingMode};
pub use request::QuoteRequest;
