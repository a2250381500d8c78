//! Integration tests driven by the reference scenario fixture.
//!
//! Each scenario pins both the raw future value and the string the form
//! would display for it.

use cuppa_core::display::format_currency;
use cuppa_core::CalculationInput;
use serde::Deserialize;
use std::fs;

const SCENARIO_FILE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/future_value_scenarios.json"
);

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    metadata: Metadata,
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // generated_date is informational
struct Metadata {
    description: String,
    generated_date: String,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    inputs: CalculationInput,
    expected: Expected,
    tolerance: f64,
}

#[derive(Debug, Deserialize)]
struct Expected {
    future_value: f64,
    display: String,
}

fn load_scenarios() -> ScenarioFile {
    let content = fs::read_to_string(SCENARIO_FILE)
        .unwrap_or_else(|e| panic!("failed to read {SCENARIO_FILE}: {e}"));
    serde_json::from_str(&content).expect("scenario fixture should be valid JSON")
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn fixture_loads() {
    let file = load_scenarios();
    assert!(!file.metadata.description.is_empty());
    assert!(file.scenarios.len() >= 3);
}

#[test]
fn future_values_match_reference() {
    let file = load_scenarios();
    let mut failures = Vec::new();

    for scenario in &file.scenarios {
        let actual = scenario.inputs.future_value();
        let diff = (actual - scenario.expected.future_value).abs();
        if diff > scenario.tolerance {
            failures.push(format!(
                "{}: expected {}, got {} (diff {:.3e})",
                scenario.name, scenario.expected.future_value, actual, diff
            ));
        }
    }

    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn displayed_values_match_reference() {
    let file = load_scenarios();
    for scenario in &file.scenarios {
        let actual = format_currency(scenario.inputs.future_value(), "$");
        assert_eq!(
            actual, scenario.expected.display,
            "display mismatch for {}",
            scenario.name
        );
    }
}

#[test]
fn breakdown_sums_to_total() {
    let file = load_scenarios();
    for scenario in &file.scenarios {
        let breakdown = scenario.inputs.breakdown();
        assert_eq!(
            breakdown.total,
            scenario.inputs.future_value(),
            "breakdown total differs for {}",
            scenario.name
        );
        assert_eq!(breakdown.total, breakdown.principal + breakdown.deposits);
    }
}
