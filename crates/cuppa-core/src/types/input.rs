//! Parsed calculation input.

use serde::{Deserialize, Serialize};

use super::{CompoundingFrequency, DepositFrequency};
use crate::calculator::{calculate_future_value, future_value_breakdown, FutureValueBreakdown};

/// The six already-parsed inputs of a future value calculation.
///
/// No range is enforced: negative, zero, or very large values are carried
/// through to the formula unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Amount invested at time zero.
    pub initial_deposit: f64,
    /// Amount added every deposit period.
    pub periodic_deposit: f64,
    /// How often `periodic_deposit` is added.
    pub deposit_frequency: DepositFrequency,
    /// Annual interest rate as a fraction (0.05 for 5%).
    pub interest_rate: f64,
    /// How often interest compounds.
    pub compounding_frequency: CompoundingFrequency,
    /// Investment horizon in years.
    pub time_horizon: f64,
}

impl CalculationInput {
    /// Future value of this input.
    pub fn future_value(&self) -> f64 {
        calculate_future_value(
            self.initial_deposit,
            self.periodic_deposit,
            self.deposit_frequency,
            self.interest_rate,
            self.compounding_frequency,
            self.time_horizon,
        )
    }

    /// Future value split into its principal and deposit components.
    pub fn breakdown(&self) -> FutureValueBreakdown {
        future_value_breakdown(self)
    }
}
