//! CLI command implementations.

pub mod calculate;
pub mod config;
pub mod frequencies;
pub mod interactive;

// Re-export submodules for convenience
pub use calculate::CalculateArgs;
pub use config::ConfigArgs;
pub use interactive::InteractiveArgs;

/// Formats a rate given as a fraction for display ("5%").
pub fn format_rate_percent(rate: f64) -> String {
    // Adding 0.0 folds -0.0 into 0.0.
    let percent = rate * 100.0 + 0.0;
    if percent.is_finite() && percent.fract() == 0.0 && percent.abs() < 1e15 {
        format!("{percent:.0}%")
    } else {
        format!("{}%", trim_trailing_zeros(&format!("{percent:.6}")))
    }
}

/// Formats a year count for display ("5 years", "1 year", "2.5 years").
pub fn format_years(years: f64) -> String {
    let years = years + 0.0;
    if years == 1.0 {
        return "1 year".to_string();
    }
    if years.is_finite() && years.fract() == 0.0 && years.abs() < 1e15 {
        format!("{years:.0} years")
    } else {
        format!("{} years", trim_trailing_zeros(&format!("{years:.6}")))
    }
}

fn trim_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
