//! Print Pricing Module
//!
//! Component calculators of the quote engine. Each one is a pure function
//! over borrowed inputs; `crate::quote::compute_cost` wires them together.

pub mod garment;
pub mod grouping;
pub mod money;
pub mod setup;
pub mod shipping;
pub mod surcharge;
pub mod tax;
pub mod tier;

pub use garment::*;
pub use grouping::*;
pub use money::*;
pub use setup::*;
pub use shipping::*;
pub use surcharge::*;
pub use tax::*;
pub use tier::*;
