//! Quote Request
//!
//! Everything one calculation needs. The persistence layer archives this
//! envelope (never the computed output) so historical quotes can be
//! recomputed deterministically.

use super::options::CostOptions;
use crate::models::{ColorCatalog, CustomerAddress, OrderLineItem, PricingTables, PrintDesign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QuoteRequest {
    #[serde(default)]
    pub order_lines: Vec<OrderLineItem>,
    #[serde(default)]
    pub print_designs: Vec<PrintDesign>,
    #[serde(default)]
    pub customer: CustomerAddress,
    pub pricing: PricingTables,
    #[serde(default)]
    pub catalog: ColorCatalog,
    #[serde(default)]
    pub options: CostOptions,
}
