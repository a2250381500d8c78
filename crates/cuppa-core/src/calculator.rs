//! Future value of an initial deposit plus periodic deposits.
//!
//! The value is computed on the compounding-period grid:
//!
//! ```text
//! r   = annual_rate / compounding_periods_per_year
//! n   = years * compounding_periods_per_year
//! k   = deposit_periods_per_year / compounding_periods_per_year
//!
//! FV  = P0 * (1 + r)^n  +  D * k * ((1 + r)^n - 1) / r      (r != 0)
//! FV  = P0             +  D * k * n                        (annual_rate == 0)
//! ```
//!
//! `k` rescales a per-deposit amount into an equivalent per-compounding-period
//! amount. It assumes deposits are spread proportionally across each
//! compounding period rather than modelling the exact deposit dates.

use serde::{Deserialize, Serialize};

use crate::types::{CalculationInput, CompoundingFrequency, DepositFrequency};

/// The two components of a future value and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureValueBreakdown {
    /// Initial deposit compounded over the horizon.
    pub principal: f64,
    /// Accumulated value of the periodic deposits.
    pub deposits: f64,
    /// `principal + deposits`.
    pub total: f64,
}

/// Computes the future value of an investment.
///
/// `interest_rate` is a fractional annual rate (0.05 for 5%) and
/// `time_horizon` is in years. Inputs are not range-checked: negative or
/// degenerate values produce whatever IEEE-754 result the formula yields,
/// including NaN or infinities. The function never panics.
///
/// An interest rate of exactly zero switches to linear accumulation of the
/// deposits.
///
/// # Example
///
/// ```rust
/// use cuppa_core::{calculate_future_value, CompoundingFrequency, DepositFrequency};
///
/// let fv = calculate_future_value(
///     0.0,
///     100.0,
///     DepositFrequency::Monthly,
///     0.05,
///     CompoundingFrequency::Annually,
///     5.0,
/// );
/// assert!((fv - 6630.76).abs() < 0.005);
/// ```
pub fn calculate_future_value(
    initial_deposit: f64,
    periodic_deposit: f64,
    deposit_frequency: DepositFrequency,
    interest_rate: f64,
    compounding_frequency: CompoundingFrequency,
    time_horizon: f64,
) -> f64 {
    future_value_breakdown(&CalculationInput {
        initial_deposit,
        periodic_deposit,
        deposit_frequency,
        interest_rate,
        compounding_frequency,
        time_horizon,
    })
    .total
}

/// Computes the future value and returns its principal and deposit parts.
///
/// `total` is bit-identical to [`calculate_future_value`] for the same input.
pub fn future_value_breakdown(input: &CalculationInput) -> FutureValueBreakdown {
    let compounding_periods = f64::from(input.compounding_frequency.periods_per_year());
    let deposit_periods = f64::from(input.deposit_frequency.periods_per_year());

    let periodic_interest_rate = input.interest_rate / compounding_periods;
    let num_periods = input.time_horizon * compounding_periods;
    let deposit_to_compounding_ratio = deposit_periods / compounding_periods;

    let growth = (1.0 + periodic_interest_rate).powf(num_periods);
    let principal = input.initial_deposit * growth;

    // Exact comparison: only a literal zero rate takes the linear branch.
    let deposits = if input.interest_rate == 0.0 {
        input.periodic_deposit * deposit_to_compounding_ratio * num_periods
    } else {
        input.periodic_deposit * deposit_to_compounding_ratio * (growth - 1.0)
            / periodic_interest_rate
    };

    FutureValueBreakdown {
        principal,
        deposits,
        total: principal + deposits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fv(
        initial: f64,
        periodic: f64,
        deposit: DepositFrequency,
        rate: f64,
        compounding: CompoundingFrequency,
        years: f64,
    ) -> f64 {
        calculate_future_value(initial, periodic, deposit, rate, compounding, years)
    }

    #[test]
    fn test_monthly_deposits_annual_compounding() {
        let value = fv(
            1000.0,
            100.0,
            DepositFrequency::Monthly,
            0.05,
            CompoundingFrequency::Annually,
            5.0,
        );
        assert_relative_eq!(value, 7907.0390625, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_initial_deposit() {
        let value = fv(
            0.0,
            100.0,
            DepositFrequency::Monthly,
            0.05,
            CompoundingFrequency::Annually,
            5.0,
        );
        assert_relative_eq!(value, 6630.7575, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_periodic_deposit() {
        let value = fv(
            1000.0,
            0.0,
            DepositFrequency::Monthly,
            0.05,
            CompoundingFrequency::Annually,
            5.0,
        );
        assert_relative_eq!(value, 1276.2815625, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        // 1000 + 100 * 12 * 5
        let value = fv(
            1000.0,
            100.0,
            DepositFrequency::Monthly,
            0.0,
            CompoundingFrequency::Annually,
            5.0,
        );
        assert_eq!(value, 7000.0);
    }

    #[test]
    fn test_negative_zero_rate_is_linear() {
        let value = fv(
            1000.0,
            100.0,
            DepositFrequency::Weekly,
            -0.0,
            CompoundingFrequency::Quarterly,
            2.0,
        );
        assert_relative_eq!(value, 1000.0 + 100.0 * 52.0 * 2.0, epsilon = 1e-9);
        assert!(value.is_finite());
    }

    #[test]
    fn test_tiny_rate_takes_annuity_branch() {
        let linear = fv(
            0.0,
            100.0,
            DepositFrequency::Monthly,
            0.0,
            CompoundingFrequency::Monthly,
            1.0,
        );
        let tiny = fv(
            0.0,
            100.0,
            DepositFrequency::Monthly,
            1e-9,
            CompoundingFrequency::Monthly,
            1.0,
        );
        assert!(tiny.is_finite());
        assert_relative_eq!(tiny, linear, max_relative = 1e-4);
    }

    #[test]
    fn test_deposit_ratio_scaling() {
        // Annual deposits with monthly compounding: ratio is 1/12.
        let value = fv(
            1000.0,
            100.0,
            DepositFrequency::Annually,
            0.05,
            CompoundingFrequency::Monthly,
            1.0,
        );
        let growth = (1.0 + 0.05 / 12.0_f64).powf(12.0);
        let expected = 1000.0 * growth + 100.0 / 12.0 * (growth - 1.0) / (0.05 / 12.0);
        assert_relative_eq!(value, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_inputs_follow_formula() {
        let value = fv(
            -1000.0,
            -100.0,
            DepositFrequency::Weekly,
            -0.05,
            CompoundingFrequency::Annually,
            -5.0,
        );
        let growth = (1.0 + -0.05_f64).powf(-5.0);
        let expected = -1000.0 * growth + -100.0 * 52.0 * (growth - 1.0) / -0.05;
        assert_eq!(value, expected);
        assert_relative_eq!(value, 29112.6097946811, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_base_fractional_exponent_is_nan() {
        // 1 + (-2.0 / 1) = -1, raised to 0.5.
        let value = fv(
            100.0,
            0.0,
            DepositFrequency::Monthly,
            -2.0,
            CompoundingFrequency::Annually,
            0.5,
        );
        assert!(value.is_nan());
    }

    #[test]
    fn test_no_deposits_is_exactly_zero() {
        for deposit in DepositFrequency::ALL {
            for compounding in CompoundingFrequency::ALL {
                assert_eq!(fv(0.0, 0.0, deposit, 0.07, compounding, 12.5), 0.0);
                assert_eq!(fv(0.0, 0.0, deposit, 0.0, compounding, 12.5), 0.0);
            }
        }
    }

    #[test]
    fn test_breakdown_components() {
        let input = CalculationInput {
            initial_deposit: 1000.0,
            periodic_deposit: 100.0,
            deposit_frequency: DepositFrequency::Monthly,
            interest_rate: 0.05,
            compounding_frequency: CompoundingFrequency::Annually,
            time_horizon: 5.0,
        };
        let breakdown = future_value_breakdown(&input);
        assert_relative_eq!(breakdown.principal, 1276.2815625, epsilon = 1e-8);
        assert_relative_eq!(breakdown.deposits, 6630.7575, epsilon = 1e-8);
        assert_eq!(breakdown.total, breakdown.principal + breakdown.deposits);
        assert_eq!(breakdown.total, input.future_value());
    }
}
