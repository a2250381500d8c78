//! # Cuppa Core
//!
//! Future value calculation for periodic-deposit investments.
//!
//! This crate provides the building blocks used by the Cuppa calculator:
//!
//! - **Calculator**: the closed-form future value of an initial deposit plus
//!   a stream of periodic deposits
//! - **Types**: deposit and compounding frequencies, the calculation input
//! - **Form**: validation of raw user-entered text into a calculation input
//! - **Display**: currency formatting of results
//!
//! ## Design Philosophy
//!
//! - **Total Functions**: the calculator never fails; IEEE-754 semantics apply
//! - **Explicit Validation**: text parsing is a separate, fallible step
//! - **Fixed Choices**: frequencies are closed enums with constant lookups
//!
//! ## Example
//!
//! ```rust
//! use cuppa_core::prelude::*;
//!
//! let fv = calculate_future_value(
//!     1000.0,
//!     100.0,
//!     DepositFrequency::Monthly,
//!     0.05,
//!     CompoundingFrequency::Annually,
//!     5.0,
//! );
//! assert_eq!(format_currency(fv, "$"), "$7,907.04");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod display;
pub mod error;
pub mod form;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{
        calculate_future_value, future_value_breakdown, FutureValueBreakdown,
    };
    pub use crate::display::{format_currency, format_grouped, format_result_line};
    pub use crate::error::{CuppaError, CuppaResult};
    pub use crate::form::{FormField, FormInput};
    pub use crate::types::{CalculationInput, CompoundingFrequency, DepositFrequency};
}

// Re-export commonly used types at crate root
pub use calculator::calculate_future_value;
pub use error::{CuppaError, CuppaResult};
pub use types::{CalculationInput, CompoundingFrequency, DepositFrequency};
