//! Validation of raw form text into a [`CalculationInput`].
//!
//! The calculator form has four free-text numeric fields and two fixed
//! pickers. Text is parsed strictly: no trimming, no thousands separators.
//! A field that does not parse means no calculation happens at all. No range
//! checks are applied, so `-5` is a valid rate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CuppaError, CuppaResult};
use crate::types::{CalculationInput, CompoundingFrequency, DepositFrequency};

/// The fields of the calculator form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Initial deposit amount.
    InitialDeposit,
    /// Periodic deposit amount.
    PeriodicDeposit,
    /// Deposit frequency picker.
    DepositFrequency,
    /// Annual interest rate, in percent.
    InterestRate,
    /// Compounding frequency picker.
    CompoundingFrequency,
    /// Time horizon, in years.
    TimeHorizon,
}

impl FormField {
    /// All fields, in the order the form presents them.
    pub const ALL: [FormField; 6] = [
        FormField::InitialDeposit,
        FormField::PeriodicDeposit,
        FormField::DepositFrequency,
        FormField::InterestRate,
        FormField::CompoundingFrequency,
        FormField::TimeHorizon,
    ];

    /// Section header shown above the field.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FormField::InitialDeposit => "Initial Deposit",
            FormField::PeriodicDeposit => "Periodic Deposit",
            FormField::DepositFrequency => "Deposit Frequency",
            FormField::InterestRate => "Interest Rate (%)",
            FormField::CompoundingFrequency => "Compounding Frequency",
            FormField::TimeHorizon => "Time Horizon (years)",
        }
    }

    /// Placeholder / prompt text for the field.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            FormField::InitialDeposit => "Enter initial deposit",
            FormField::PeriodicDeposit => "Enter periodic deposit",
            FormField::DepositFrequency => "Select deposit frequency",
            FormField::InterestRate => "Enter interest rate",
            FormField::CompoundingFrequency => "Select compounding frequency",
            FormField::TimeHorizon => "Enter time horizon",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw form state as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Initial deposit text.
    pub initial_deposit: String,
    /// Periodic deposit text.
    pub periodic_deposit: String,
    /// Selected deposit frequency.
    pub deposit_frequency: DepositFrequency,
    /// Interest rate text, in percent ("5" means 5%).
    pub interest_rate: String,
    /// Selected compounding frequency.
    pub compounding_frequency: CompoundingFrequency,
    /// Time horizon text, in years.
    pub time_horizon: String,
}

impl FormInput {
    /// Creates an empty form with the default picker selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores text for one of the numeric fields. Picker fields are ignored.
    pub fn set_text(&mut self, field: FormField, text: impl Into<String>) {
        let text = text.into();
        match field {
            FormField::InitialDeposit => self.initial_deposit = text,
            FormField::PeriodicDeposit => self.periodic_deposit = text,
            FormField::InterestRate => self.interest_rate = text,
            FormField::TimeHorizon => self.time_horizon = text,
            FormField::DepositFrequency | FormField::CompoundingFrequency => {}
        }
    }

    /// Parses every field and converts the rate from percent to a fraction.
    ///
    /// Fields are checked in form order and the first failure is returned.
    pub fn validate(&self) -> CuppaResult<CalculationInput> {
        let initial_deposit = parse_number(FormField::InitialDeposit, &self.initial_deposit)?;
        let periodic_deposit = parse_number(FormField::PeriodicDeposit, &self.periodic_deposit)?;
        let rate_percent = parse_number(FormField::InterestRate, &self.interest_rate)?;
        let time_horizon = parse_number(FormField::TimeHorizon, &self.time_horizon)?;

        Ok(CalculationInput {
            initial_deposit,
            periodic_deposit,
            deposit_frequency: self.deposit_frequency,
            interest_rate: rate_percent / 100.0,
            compounding_frequency: self.compounding_frequency,
            time_horizon,
        })
    }

    /// Validates and calculates, yielding `None` when any field is invalid.
    pub fn calculate(&self) -> Option<f64> {
        match self.validate() {
            Ok(input) => Some(input.future_value()),
            Err(err) => {
                log::debug!("calculation withheld: {err}");
                None
            }
        }
    }
}

/// Parses one numeric field using Rust's `f64` grammar.
pub fn parse_number(field: FormField, text: &str) -> CuppaResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CuppaError::invalid_field(field.label(), text))
}
