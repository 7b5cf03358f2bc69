//! Display formatting for extracted values
//!
//! Two rules, chosen per field by its `FormatRule`:
//!
//! - `General` (fixed and key-scanned cells): blank → "0"; whole numbers as
//!   thousands-grouped integers; fractional numbers as two-decimal
//!   percentages; anything else verbatim.
//! - `TwoDecimal` (month-column cells): parse as a number, 0 when the cell
//!   text does not parse, always rendered with two decimal places.

use crate::excel::extractor::{FormatRule, FIELD_SPECS};

/// Format the raw extraction output, preserving count and order.
/// Each position uses the rule of its `FIELD_SPECS` entry.
pub fn format_values(raw: &[String]) -> Vec<String> {
    raw.iter()
        .zip(FIELD_SPECS.iter())
        .map(|(text, spec)| match spec.rule() {
            FormatRule::General => format_general(text),
            FormatRule::TwoDecimal => format_two_decimal(text),
        })
        .collect()
}

/// General rule for fixed and key-scanned cells
pub fn format_general(raw: &str) -> String {
    if raw.is_empty() {
        return "0".to_string();
    }
    match raw.parse::<f64>() {
        // Exact-equality integer check: 100.0 is an integer, 100.01 is not
        Ok(value) if value == value.trunc() => group_thousands(value as i64),
        Ok(value) => format!("{:.2}%", value * 100.0),
        Err(_) => raw.to_string(),
    }
}

/// Month-column rule: unparseable text degrades to 0 instead of aborting
pub fn format_two_decimal(raw: &str) -> String {
    let value = raw.parse::<f64>().unwrap_or(0.0);
    format!("{value:.2}")
}

/// Thousands-grouped integer, e.g. 1234567 → "1,234,567"
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
