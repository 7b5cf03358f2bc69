//! Scribe - monthly drug & supplies expenditure report generator
//!
//! This library extracts a fixed, ordered set of 34 figures from the
//! accounting office's monthly Excel workbook, formats them with
//! type-dependent rules, and fills the fixed prose template to produce the
//! monthly report.
//!
//! # Pipeline
//!
//! - `excel::workbook` locates cells three ways: literal "A1" addresses,
//!   rows key-scanned by the `{year:03}/{month:02}` label in column A, and
//!   columns header-scanned by the `{month}月` label in row 2
//! - `excel::extractor` resolves the ordered 34-field table; any failed
//!   lookup aborts the run
//! - `report::formatter` renders each value (grouped integers, two-decimal
//!   percentages, verbatim text)
//! - `report::template` substitutes year, month, and the 34 values into the
//!   36-placeholder report template
//! - `report::docx` writes the filled text as a minimal Word document
//!
//! # Example
//!
//! ```no_run
//! use scribe::excel::{extract, Workbook};
//! use scribe::report::{format_values, render_report, write_docx};
//! use std::path::Path;
//!
//! let mut workbook = Workbook::open("113年5月報表.xlsx")?;
//! let raw = extract(&mut workbook, 113, 5)?;
//! let values = format_values(&raw);
//! let report = render_report(113, 5, &values, false)?;
//! write_docx(Path::new("報表_113_5.docx"), &report)?;
//! # Ok::<(), scribe::error::ScribeError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod report;

// Re-export commonly used types
pub use error::{ScribeError, ScribeResult};
pub use excel::{extract, FieldSpec, Workbook, FIELD_COUNT};
pub use report::{format_values, render_report, write_docx, REPORT_TEMPLATE};
