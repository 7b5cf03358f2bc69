//! Workbook access and field extraction
//!
//! - `workbook`: calamine-backed cell location (fixed addresses, key-scanned
//!   rows, header-scanned columns)
//! - `extractor`: the ordered 34-field extraction sequence

pub mod extractor;
pub mod workbook;

pub use extractor::{extract, FieldSpec, FormatRule, FIELD_COUNT, FIELD_SPECS};
pub use workbook::{Sheet, Workbook};
