//! CLI command handlers

use crate::error::ScribeResult;
use crate::excel::{extract, Workbook, FIELD_SPECS};
use crate::report::{format_values, render_report, write_docx};
use chrono::Datelike;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the generate command: full pipeline, report written as .docx
pub fn generate(
    workbook: PathBuf,
    year: u32,
    month: u32,
    output: Option<PathBuf>,
    strict: bool,
    verbose: bool,
) -> ScribeResult<()> {
    println!("{}", "📊 Scribe - Monthly expenditure report".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Period: {}", format!("{year}年{month}月").bright_yellow());
    println!();

    let report = build_report(&workbook, year, month, strict, verbose)?;

    let output = output.unwrap_or_else(|| default_output_name(year, month));
    write_docx(&output, &report)?;

    println!(
        "{} {}",
        "✅ Report written to".bold().green(),
        output.display()
    );
    Ok(())
}

/// Execute the preview command: full pipeline, report printed to stdout
pub fn preview(
    workbook: PathBuf,
    year: u32,
    month: u32,
    strict: bool,
    verbose: bool,
) -> ScribeResult<()> {
    let report = build_report(&workbook, year, month, strict, verbose)?;
    println!("{report}");
    Ok(())
}

/// Execute the fields command: list every extracted field with its source
/// location, raw cell text, and formatted value
pub fn fields(workbook: PathBuf, year: u32, month: u32) -> ScribeResult<()> {
    println!("{}", "🔍 Scribe - Extracted fields".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Period: {}", format!("{year}年{month}月").bright_yellow());
    println!();

    let mut book = Workbook::open(&workbook)?;
    let raw = extract(&mut book, year, month)?;
    let formatted = format_values(&raw);

    for (i, (spec, (raw, value))) in FIELD_SPECS
        .iter()
        .zip(raw.iter().zip(formatted.iter()))
        .enumerate()
    {
        let shown_raw = if raw.is_empty() { "(blank)" } else { raw.as_str() };
        println!(
            "   {:>2}. {:<32} {:>14} → {}",
            i + 1,
            spec.describe().cyan(),
            shown_raw,
            value.bold()
        );
    }
    Ok(())
}

/// Run extraction, formatting, and template substitution for one workbook
fn build_report(
    workbook: &Path,
    year: u32,
    month: u32,
    strict: bool,
    verbose: bool,
) -> ScribeResult<String> {
    if verbose {
        println!("{}", "📖 Opening workbook...".cyan());
    }
    let mut book = Workbook::open(workbook)?;

    if verbose {
        println!("{}", "📥 Extracting fields...".cyan());
    }
    let raw = extract(&mut book, year, month)?;
    if verbose {
        println!("   {} raw values extracted", raw.len());
    }

    let values = format_values(&raw);
    render_report(year, month, &values, strict)
}

/// Default output file name, e.g. 報表_113_5.docx
pub fn default_output_name(year: u32, month: u32) -> PathBuf {
    PathBuf::from(format!("報表_{year}_{month}.docx"))
}

/// The previous calendar month as a (ROC year, month) pair.
/// Reports are produced for the month that just closed.
pub fn default_period() -> (u32, u32) {
    let today = chrono::Local::now().date_naive();
    previous_roc_period(today.year(), today.month())
}

fn previous_roc_period(year: i32, month: u32) -> (u32, u32) {
    let (year, month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    ((year - 1911).max(1) as u32, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_roc_period() {
        // 2024-06 → 民國113年5月
        assert_eq!(previous_roc_period(2024, 6), (113, 5));
        // January rolls back to December of the previous ROC year
        assert_eq!(previous_roc_period(2025, 1), (113, 12));
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(
            default_output_name(113, 5),
            PathBuf::from("報表_113_5.docx")
        );
    }
}
