//! Domain types for the future value calculation.
//!
//! - [`DepositFrequency`]: how often periodic deposits are made
//! - [`CompoundingFrequency`]: how often interest compounds
//! - [`CalculationInput`]: the six parsed inputs of one calculation

mod frequency;
mod input;

pub use frequency::{CompoundingFrequency, DepositFrequency};
pub use input::CalculationInput;
