//! Customer Address Model

use serde::{Deserialize, Serialize};

/// Customer address as far as shipping is concerned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerAddress {
    /// Billing address line, starts with the prefecture
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub has_separate_shipping_address: bool,
    #[serde(default)]
    pub shipping_address1: Option<String>,
}

impl CustomerAddress {
    pub fn new(address1: impl Into<String>) -> Self {
        Self {
            address1: address1.into(),
            ..Default::default()
        }
    }

    pub fn with_shipping_address(mut self, address1: impl Into<String>) -> Self {
        self.has_separate_shipping_address = true;
        self.shipping_address1 = Some(address1.into());
        self
    }

    /// Address line the order ships to
    pub fn delivery_address(&self) -> &str {
        match (&self.shipping_address1, self.has_separate_shipping_address) {
            (Some(addr), true) if !addr.trim().is_empty() => addr,
            _ => &self.address1,
        }
    }
}
