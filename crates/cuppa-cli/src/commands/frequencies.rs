//! Frequencies command: lists the picker options.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use cuppa_core::{CompoundingFrequency, DepositFrequency};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json_value, print_output};

/// One picker option.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FrequencyRow {
    #[tabled(rename = "Picker")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tabled(display_with = "display_kind")]
    pub kind: Option<&'static str>,
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Periods/Year")]
    pub periods_per_year: u32,
}

fn display_kind(kind: &Option<&'static str>) -> String {
    kind.unwrap_or_default().to_string()
}

#[derive(Debug, Serialize)]
struct FrequencyListing {
    deposit: Vec<FrequencyRow>,
    compounding: Vec<FrequencyRow>,
}

/// Deposit picker options in display order.
pub fn deposit_rows() -> Vec<FrequencyRow> {
    DepositFrequency::ALL
        .iter()
        .map(|f| FrequencyRow {
            kind: None,
            name: f.as_str(),
            label: f.to_string(),
            periods_per_year: f.periods_per_year(),
        })
        .collect()
}

/// Compounding picker options in display order.
pub fn compounding_rows() -> Vec<FrequencyRow> {
    CompoundingFrequency::ALL
        .iter()
        .map(|f| FrequencyRow {
            kind: None,
            name: f.as_str(),
            label: f.to_string(),
            periods_per_year: f.periods_per_year(),
        })
        .collect()
}

fn tagged(kind: &'static str, rows: Vec<FrequencyRow>) -> impl Iterator<Item = FrequencyRow> {
    rows.into_iter().map(move |row| FrequencyRow {
        kind: Some(kind),
        ..row
    })
}

/// Execute the frequencies command.
pub fn execute(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_value(&FrequencyListing {
            deposit: deposit_rows(),
            compounding: compounding_rows(),
        }),
        OutputFormat::Minimal => {
            println!("{}", minimal_line("deposit", &deposit_rows()));
            println!("{}", minimal_line("compounding", &compounding_rows()));
            Ok(())
        }
        OutputFormat::Table => {
            print_header("Frequencies");
            let rows: Vec<_> = tagged("deposit", deposit_rows())
                .chain(tagged("compounding", compounding_rows()))
                .collect();
            print_output(&rows, format)
        }
        OutputFormat::Csv => {
            let rows: Vec<_> = tagged("deposit", deposit_rows())
                .chain(tagged("compounding", compounding_rows()))
                .collect();
            print_output(&rows, format)
        }
    }
}

fn minimal_line(kind: &str, rows: &[FrequencyRow]) -> String {
    let names: Vec<&str> = rows.iter().map(|row| row.name).collect();
    format!("{kind}: {}", names.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_picker_order() {
        let deposit: Vec<_> = deposit_rows().iter().map(|r| r.periods_per_year).collect();
        assert_eq!(deposit, vec![365, 52, 12, 1]);

        let compounding: Vec<_> = compounding_rows().iter().map(|r| r.name).collect();
        assert_eq!(compounding, vec!["daily", "monthly", "quarterly", "annually"]);
    }

    #[test]
    fn test_minimal_line() {
        assert_eq!(
            minimal_line("deposit", &deposit_rows()),
            "deposit: daily weekly monthly annually"
        );
    }

    #[test]
    fn test_json_listing_omits_kind() {
        let listing = FrequencyListing {
            deposit: deposit_rows(),
            compounding: compounding_rows(),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["compounding"][2]["name"], "quarterly");
        assert_eq!(json["compounding"][2]["periods_per_year"], 4);
        assert!(json["deposit"][0].get("kind").is_none());
    }

    #[test]
    fn test_table_includes_picker_column() {
        let rows: Vec<_> = tagged("deposit", deposit_rows()).collect();
        let table = crate::output::render_table(&rows);
        assert!(table.contains("Periods/Year"));
        assert!(table.contains("Weekly"));
        assert!(table.contains("deposit"));
    }
}
