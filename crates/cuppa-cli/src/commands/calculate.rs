//! Calculate command implementation.
//!
//! Takes the form fields as flags, validates them, and prints the future
//! value. Amount and rate flags are kept as text so they go through the same
//! validation as the interactive form.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cuppa_core::display::{format_currency, format_result_line};
use cuppa_core::form::FormInput;
use cuppa_core::{CalculationInput, CompoundingFrequency, DepositFrequency};

use crate::cli::OutputFormat;
use crate::commands::config::Preferences;
use crate::commands::{format_rate_percent, format_years};
use crate::error::CliError;
use crate::output::{print_csv_record, print_header, print_json_value, KeyValue};

/// Arguments for the calculate command.
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Initial deposit amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub initial: String,

    /// Amount deposited every deposit period
    #[arg(short, long, allow_hyphen_values = true)]
    pub periodic: String,

    /// Deposit frequency: daily, weekly, monthly, annually
    #[arg(short, long)]
    pub deposit_frequency: Option<DepositFrequency>,

    /// Annual interest rate as a percentage (5 for 5%)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: String,

    /// Compounding frequency: daily, monthly, quarterly, annually
    #[arg(short, long)]
    pub compounding: Option<CompoundingFrequency>,

    /// Time horizon in years
    #[arg(short, long, allow_hyphen_values = true)]
    pub years: String,

    /// Show the principal and deposit components separately
    #[arg(short, long)]
    pub breakdown: bool,
}

impl CalculateArgs {
    /// Builds the form, filling unset pickers from preferences.
    pub fn to_form(&self, preferences: &Preferences) -> FormInput {
        FormInput {
            initial_deposit: self.initial.clone(),
            periodic_deposit: self.periodic.clone(),
            deposit_frequency: self
                .deposit_frequency
                .unwrap_or_else(|| preferences.deposit_frequency()),
            interest_rate: self.rate.clone(),
            compounding_frequency: self
                .compounding
                .unwrap_or_else(|| preferences.compounding_frequency()),
            time_horizon: self.years.clone(),
        }
    }
}

/// Machine-readable calculation result.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub initial_deposit: f64,
    pub periodic_deposit: f64,
    pub deposit_frequency: DepositFrequency,
    pub interest_rate: f64,
    pub compounding_frequency: CompoundingFrequency,
    pub time_horizon: f64,
    pub principal_value: f64,
    pub deposits_value: f64,
    pub future_value: f64,
    pub display: String,
}

impl CalculationReport {
    /// Runs the calculation for `input`.
    pub fn new(input: &CalculationInput, symbol: &str) -> Self {
        let breakdown = input.breakdown();
        Self {
            initial_deposit: input.initial_deposit,
            periodic_deposit: input.periodic_deposit,
            deposit_frequency: input.deposit_frequency,
            interest_rate: input.interest_rate,
            compounding_frequency: input.compounding_frequency,
            time_horizon: input.time_horizon,
            principal_value: breakdown.principal,
            deposits_value: breakdown.deposits,
            future_value: breakdown.total,
            display: format_currency(breakdown.total, symbol),
        }
    }

    /// Table rows: the inputs as entered, then the result.
    pub fn rows(&self, symbol: &str, breakdown: bool) -> Vec<KeyValue> {
        let mut rows = vec![
            KeyValue::new("Initial Deposit", format_currency(self.initial_deposit, symbol)),
            KeyValue::new("Periodic Deposit", format_currency(self.periodic_deposit, symbol)),
            KeyValue::new("Deposit Frequency", self.deposit_frequency.to_string()),
            KeyValue::new("Interest Rate", format_rate_percent(self.interest_rate)),
            KeyValue::new("Compounding Frequency", self.compounding_frequency.to_string()),
            KeyValue::new("Time Horizon", format_years(self.time_horizon)),
        ];
        if breakdown {
            rows.push(KeyValue::new(
                "Principal Growth",
                format_currency(self.principal_value, symbol),
            ));
            rows.push(KeyValue::new(
                "Deposit Growth",
                format_currency(self.deposits_value, symbol),
            ));
        }
        rows.push(KeyValue::new("Future Value", self.display.clone()));
        rows
    }
}

/// Prints a validated calculation in the requested format.
pub fn report(
    input: &CalculationInput,
    format: OutputFormat,
    symbol: &str,
    breakdown: bool,
) -> Result<()> {
    let report = CalculationReport::new(input, symbol);
    if !report.future_value.is_finite() {
        tracing::warn!(value = report.future_value, "future value is not finite");
    }

    match format {
        OutputFormat::Table => {
            print_header("Future Value");
            crate::output::print_output(&report.rows(symbol, breakdown), format)?;
        }
        OutputFormat::Json => print_json_value(&report)?,
        OutputFormat::Csv => print_csv_record(&report)?,
        OutputFormat::Minimal => println!("{}", format_result_line(report.future_value, symbol)),
    }

    Ok(())
}

/// Execute the calculate command.
pub fn execute(args: CalculateArgs, format: OutputFormat, preferences: &Preferences) -> Result<()> {
    let form = args.to_form(preferences);
    tracing::debug!(?form, "calculate");

    // Invalid text means no result is shown at all
    let input = form.validate().map_err(CliError::from)?;
    tracing::info!(?input, "validated form");

    report(&input, format, preferences.currency_symbol(), args.breakdown)
}
