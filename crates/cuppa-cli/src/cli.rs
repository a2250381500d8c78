//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalculateArgs, ConfigArgs, InteractiveArgs};

/// Cuppa - Investment future value calculator
#[derive(Parser)]
#[command(name = "cuppa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, else table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress status messages and log only errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Preferences file to use instead of the default location
    #[arg(long, env = "CUPPA_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the future value of an investment
    Calculate(CalculateArgs),

    /// Fill in the calculator form one field at a time
    Interactive(InteractiveArgs),

    /// List deposit and compounding frequency choices
    Frequencies,

    /// Manage preferences
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the result line)
    Minimal,
}

impl OutputFormat {
    /// Returns the lowercase name used in preferences.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Minimal => "minimal",
        }
    }

    /// Parses a preference value, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}
