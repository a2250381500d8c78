//! Cuppa CLI - Command-line future value calculator.
//!
//! # Usage
//!
//! ```bash
//! # Calculate a future value (rate in percent)
//! cuppa calculate --initial 1000 --periodic 100 --rate 5 --years 5
//!
//! # Fill in the form field by field
//! cuppa interactive
//!
//! # Show the available deposit and compounding frequencies
//! cuppa frequencies
//!
//! # Change the default compounding frequency
//! cuppa config set compounding_frequency quarterly
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use cli::{Cli, Commands};
use commands::config::Preferences;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);
    output::set_quiet(cli.quiet);

    // Preferences supply defaults for anything not given on the command line
    let config_path = commands::config::config_path(cli.config.as_deref())?;
    let preferences = Preferences::load(&config_path)?;
    if !preferences.use_colors() {
        colored::control::set_override(false);
    }

    let format = cli.format.unwrap_or_else(|| preferences.default_format());
    tracing::debug!(?format, config = %config_path.display(), "starting");

    // Execute command
    match cli.command {
        Commands::Calculate(args) => commands::calculate::execute(args, format, &preferences)?,
        Commands::Interactive(args) => commands::interactive::execute(args, format, &preferences)?,
        Commands::Frequencies => commands::frequencies::execute(format)?,
        Commands::Config(args) => commands::config::execute(args, format, &config_path)?,
    }

    Ok(())
}
