//! Interactive form.
//!
//! Prompts for each field in form order. Numeric fields take free text;
//! the two pickers show a numbered list and accept a number, a name, or an
//! empty line to keep the current selection.
//!
//! A field that does not parse produces no result rather than an error
//! message. Prompts go to stderr so that `--format json` output on stdout
//! stays parseable.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::Args;

use cuppa_core::form::{FormField, FormInput};
use cuppa_core::{CompoundingFrequency, DepositFrequency};

use crate::cli::OutputFormat;
use crate::commands::config::Preferences;
use crate::error::{CliError, CliResult};

/// Arguments for the interactive command.
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Show the principal and deposit components separately
    #[arg(short, long)]
    pub breakdown: bool,
}

/// Execute the interactive command.
pub fn execute(
    args: InteractiveArgs,
    format: OutputFormat,
    preferences: &Preferences,
) -> Result<()> {
    let defaults = FormInput {
        deposit_frequency: preferences.deposit_frequency(),
        compounding_frequency: preferences.compounding_frequency(),
        ..FormInput::new()
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts = io::stderr();

    let form = fill_form(&mut input, &mut prompts, defaults)?.ok_or(CliError::Cancelled)?;

    match form.validate() {
        Ok(calculation) => crate::commands::calculate::report(
            &calculation,
            format,
            preferences.currency_symbol(),
            args.breakdown,
        ),
        Err(err) => {
            tracing::info!(%err, "form incomplete, no result");
            Ok(())
        }
    }
}

/// Walks every field of the form. Returns `None` if input ends early.
pub fn fill_form<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    mut form: FormInput,
) -> CliResult<Option<FormInput>> {
    for field in FormField::ALL {
        match field {
            FormField::DepositFrequency => {
                let Some(choice) = prompt_choice(
                    input,
                    out,
                    field,
                    &DepositFrequency::ALL,
                    form.deposit_frequency,
                )?
                else {
                    return Ok(None);
                };
                form.deposit_frequency = choice;
            }
            FormField::CompoundingFrequency => {
                let Some(choice) = prompt_choice(
                    input,
                    out,
                    field,
                    &CompoundingFrequency::ALL,
                    form.compounding_frequency,
                )?
                else {
                    return Ok(None);
                };
                form.compounding_frequency = choice;
            }
            _ => {
                writeln!(out, "{}", field.label())?;
                write!(out, "{}: ", field.prompt())?;
                out.flush()?;
                let Some(text) = read_line(input)? else {
                    return Ok(None);
                };
                form.set_text(field, text);
            }
        }
    }
    Ok(Some(form))
}

/// Prompts until one of `options` is chosen.
fn prompt_choice<T, R, W>(
    input: &mut R,
    out: &mut W,
    field: FormField,
    options: &[T],
    current: T,
) -> CliResult<Option<T>>
where
    T: Copy + PartialEq + Display + FromStr,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", field.label())?;
    for (idx, option) in options.iter().enumerate() {
        let marker = if *option == current { '*' } else { ' ' };
        writeln!(out, "{marker}{:>2}) {option}", idx + 1)?;
    }

    loop {
        write!(
            out,
            "{} (1-{}, Enter keeps {current}): ",
            field.prompt(),
            options.len()
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(Some(current));
        }

        if let Ok(number) = choice.parse::<usize>() {
            if (1..=options.len()).contains(&number) {
                return Ok(Some(options[number - 1]));
            }
            writeln!(
                out,
                "Invalid choice: {number}. Enter a number between 1 and {}.",
                options.len()
            )?;
            continue;
        }

        match choice.parse::<T>() {
            Ok(value) if options.contains(&value) => return Ok(Some(value)),
            _ => writeln!(out, "Unknown choice: {choice}.")?,
        }
    }
}

/// Reads one line without its line terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Option<FormInput>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let form = fill_form(&mut input, &mut out, FormInput::new()).unwrap();
        (form, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_form_by_number() {
        let (form, transcript) = run("1000\n100\n3\n5\n4\n5\n");
        let form = form.unwrap();
        assert_eq!(form.initial_deposit, "1000");
        assert_eq!(form.periodic_deposit, "100");
        assert_eq!(form.deposit_frequency, DepositFrequency::Monthly);
        assert_eq!(form.interest_rate, "5");
        assert_eq!(form.compounding_frequency, CompoundingFrequency::Annually);
        assert_eq!(form.time_horizon, "5");

        assert!(transcript.contains("Initial Deposit"));
        assert!(transcript.contains("Enter initial deposit: "));
        assert!(transcript.contains("* 3) Monthly"));
        assert!(transcript.contains("  2) Weekly"));

        let value = form.calculate().unwrap();
        assert!((value - 7907.04).abs() < 0.005);
    }

    #[test]
    fn test_pickers_accept_names_and_keep_default() {
        let (form, _) = run("1\n2\nweekly\n5\n\n10\n");
        let form = form.unwrap();
        assert_eq!(form.deposit_frequency, DepositFrequency::Weekly);
        assert_eq!(form.compounding_frequency, CompoundingFrequency::Annually);
    }

    #[test]
    fn test_picker_reprompts_on_bad_choice() {
        let (form, transcript) = run("1\n2\n9\nhourly\nquarterly\n4\n5\n2\n1\n");
        let form = form.unwrap();
        assert_eq!(form.deposit_frequency, DepositFrequency::Annually);
        assert!(transcript.contains("Invalid choice: 9. Enter a number between 1 and 4."));
        assert!(transcript.contains("Unknown choice: hourly."));
        assert!(transcript.contains("Unknown choice: quarterly."));
        assert_eq!(form.compounding_frequency, CompoundingFrequency::Monthly);
    }

    #[test]
    fn test_text_kept_verbatim() {
        let (form, _) = run(" 1000\r\n1,000\n\n\n\n\n");
        let form = form.unwrap();
        assert_eq!(form.initial_deposit, " 1000");
        assert_eq!(form.periodic_deposit, "1,000");
        assert!(form.calculate().is_none());
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (form, _) = run("1000\n100\n");
        assert!(form.is_none());
        let (form, _) = run("");
        assert!(form.is_none());
    }
}
