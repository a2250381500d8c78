//! Currency display of calculation results.
//!
//! Results are shown with exactly two fractional digits and comma thousands
//! separators, prefixed by a currency symbol: `$7,907.04`, `$-5,532.08`.

/// Formats a value with two decimals and thousands separators.
///
/// Values that round to zero never carry a minus sign. Non-finite values
/// render as `NaN`, `∞` and `-∞`.
///
/// ```rust
/// use cuppa_core::display::format_grouped;
///
/// assert_eq!(format_grouped(1234567.891), "1,234,567.89");
/// assert_eq!(format_grouped(-42.0), "-42.00");
/// ```
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed != "0.00" {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Formats a value as currency: `symbol` followed by [`format_grouped`].
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", format_grouped(value))
}

/// The result line shown under the form.
pub fn format_result_line(value: f64, symbol: &str) -> String {
    format!("Future Value: {}", format_currency(value, symbol))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
