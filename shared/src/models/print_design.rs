//! Print Design Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Print area size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrintSize {
    #[serde(rename = "10x10")]
    S10x10,
    #[serde(rename = "15x15")]
    S15x15,
    #[serde(rename = "28x35")]
    S28x35,
    #[serde(rename = "30x40")]
    S30x40,
    #[serde(rename = "35x50")]
    S35x50,
}

impl PrintSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintSize::S10x10 => "10x10",
            PrintSize::S15x15 => "15x15",
            PrintSize::S28x35 => "28x35",
            PrintSize::S30x40 => "30x40",
            PrintSize::S35x50 => "35x50",
        }
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plate making method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlateType {
    #[default]
    Normal,
    /// Color-separated plates (photo / gradient artwork)
    Decomposition,
}

impl fmt::Display for PlateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateType::Normal => f.write_str("normal"),
            PlateType::Decomposition => f.write_str("decomposition"),
        }
    }
}

/// Special ink applied to a design (glitter, foam, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialInkUse {
    pub ink_type: String,
    pub count: u32,
}

/// One print slot on the garment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrintDesign {
    pub id: String,
    /// Print location; empty means an unused slot
    #[serde(default)]
    pub location: String,
    pub size: PrintSize,
    pub color_count: u32,
    #[serde(default)]
    pub plate_type: PlateType,
    #[serde(default)]
    pub special_inks: Vec<SpecialInkUse>,
}

impl PrintDesign {
    pub fn new(id: impl Into<String>, location: impl Into<String>, size: PrintSize, color_count: u32) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            size,
            color_count,
            plate_type: PlateType::Normal,
            special_inks: vec![],
        }
    }

    pub fn with_plate_type(mut self, plate_type: PlateType) -> Self {
        self.plate_type = plate_type;
        self
    }

    pub fn with_ink(mut self, ink_type: impl Into<String>, count: u32) -> Self {
        self.special_inks.push(SpecialInkUse {
            ink_type: ink_type.into(),
            count,
        });
        self
    }

    /// Whether this design is printed at all.
    ///
    /// Inactive designs cost nothing and take no part in grouping or setup.
    pub fn is_active(&self) -> bool {
        !self.location.trim().is_empty() && self.color_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_designs() {
        assert!(!PrintDesign::new("d1", "", PrintSize::S10x10, 2).is_active());
        assert!(!PrintDesign::new("d2", "   ", PrintSize::S10x10, 2).is_active());
        assert!(!PrintDesign::new("d3", "frontCenter", PrintSize::S10x10, 0).is_active());
        assert!(PrintDesign::new("d4", "frontCenter", PrintSize::S10x10, 1).is_active());
    }

    #[test]
    fn test_print_size_wire_format() {
        let json = serde_json::to_string(&PrintSize::S30x40).unwrap();
        assert_eq!(json, "\"30x40\"");
        let size: PrintSize = serde_json::from_str("\"10x10\"").unwrap();
        assert_eq!(size, PrintSize::S10x10);
        assert_eq!(size.to_string(), "10x10");
    }

    #[test]
    fn test_design_defaults_from_json() {
        let design: PrintDesign =
            serde_json::from_str(r#"{"id":"d1","size":"10x10","color_count":3}"#).unwrap();
        assert_eq!(design.location, "");
        assert_eq!(design.plate_type, PlateType::Normal);
        assert!(design.special_inks.is_empty());
        assert!(!design.is_active());
    }
}
