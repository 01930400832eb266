//! Shared types for the print-shop quote engine
//!
//! Order data, pricing tables, pricing options and the cost breakdown,
//! exchanged between the engine, the data service and the storefront.

pub mod error;
pub mod models;
pub mod quote;

// Re-exports
pub use error::{QuoteError, QuoteResult};
pub use serde::{Deserialize, Serialize};
