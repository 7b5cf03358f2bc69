//! Ordered field extraction
//!
//! The report consumes exactly [`FIELD_COUNT`] values from six worksheets.
//! `FIELD_SPECS` pins down, in report order, where each one lives; the
//! extractor resolves them in sequence and returns the raw cell texts. A
//! single failed lookup aborts the whole extraction; there is no default
//! substitution and no partial result.

use crate::error::ScribeResult;
use crate::excel::workbook::{column_number, Sheet, Workbook};
use std::collections::HashMap;

/// Number of values the report template consumes after year and month
pub const FIELD_COUNT: usize = 34;

/// Header labels live in row 2 of the month-column sheets
const HEADER_ROW: u32 = 2;

/// How a field's raw text is rendered for the report (see `report::formatter`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Thousands-grouped integer / two-decimal percentage / verbatim text
    General,
    /// Parse as a number (0 when unparseable), always two decimal places
    TwoDecimal,
}

/// Where one report value lives in the workbook
#[derive(Debug, Clone, Copy)]
pub enum FieldSpec {
    /// A literal, unchanging cell address
    Fixed {
        sheet: &'static str,
        address: &'static str,
    },
    /// A column read at the row whose column-A text is the year/month key
    KeyRow {
        sheet: &'static str,
        column: &'static str,
    },
    /// A fixed row read at the column whose row-2 header is "{month}月"
    MonthHeader {
        sheet: &'static str,
        value_row: u32,
    },
}

impl FieldSpec {
    pub fn rule(&self) -> FormatRule {
        match self {
            FieldSpec::Fixed { .. } | FieldSpec::KeyRow { .. } => FormatRule::General,
            FieldSpec::MonthHeader { .. } => FormatRule::TwoDecimal,
        }
    }

    /// Human-readable source location, for operator diagnostics
    pub fn describe(&self) -> String {
        match self {
            FieldSpec::Fixed { sheet, address } => format!("{sheet}!{address}"),
            FieldSpec::KeyRow { sheet, column } => format!("{sheet}!{column} (key row)"),
            FieldSpec::MonthHeader { sheet, value_row } => {
                format!("{sheet}!row {value_row} (month column)")
            }
        }
    }
}

const HEADQUARTERS: &str = "主計室";
const ACCOUNTING_ANNEX: &str = "附件 會計";
const SUPPLIES_ANNEX: &str = "藥衛材(不含花榮)";
const DRUGS: &str = "藥品";
const SUPPLIES: &str = "衛材";
const DRUGS_AND_SUPPLIES: &str = "藥衛";

const fn fixed(address: &'static str) -> FieldSpec {
    FieldSpec::Fixed {
        sheet: HEADQUARTERS,
        address,
    }
}

const fn keyed(sheet: &'static str, column: &'static str) -> FieldSpec {
    FieldSpec::KeyRow { sheet, column }
}

const fn monthly(sheet: &'static str, value_row: u32) -> FieldSpec {
    FieldSpec::MonthHeader { sheet, value_row }
}

/// The one ordering contract between extraction and the report template.
/// Positions here are positions in the filled prose; do not reorder.
pub const FIELD_SPECS: [FieldSpec; FIELD_COUNT] = [
    // 主計室 fixed cells
    fixed("B7"),
    fixed("C7"),
    fixed("D7"),
    fixed("F7"),
    fixed("H7"),
    fixed("I7"),
    fixed("J7"),
    fixed("K7"),
    fixed("L7"),
    fixed("N7"),
    // 附件 會計, at the year/month key row
    keyed(ACCOUNTING_ANNEX, "I"),
    keyed(ACCOUNTING_ANNEX, "B"),
    keyed(ACCOUNTING_ANNEX, "L"),
    keyed(ACCOUNTING_ANNEX, "E"),
    keyed(ACCOUNTING_ANNEX, "N"),
    keyed(ACCOUNTING_ANNEX, "J"),
    keyed(ACCOUNTING_ANNEX, "C"),
    keyed(ACCOUNTING_ANNEX, "M"),
    keyed(ACCOUNTING_ANNEX, "F"),
    keyed(ACCOUNTING_ANNEX, "O"),
    keyed(ACCOUNTING_ANNEX, "H"),
    keyed(ACCOUNTING_ANNEX, "K"),
    keyed(ACCOUNTING_ANNEX, "P"),
    // 藥衛材(不含花榮), at the year/month key row
    keyed(SUPPLIES_ANNEX, "D"),
    keyed(SUPPLIES_ANNEX, "K"),
    keyed(SUPPLIES_ANNEX, "N"),
    keyed(SUPPLIES_ANNEX, "G"),
    keyed(SUPPLIES_ANNEX, "Q"),
    keyed(SUPPLIES_ANNEX, "H"),
    keyed(SUPPLIES_ANNEX, "R"),
    // month-column sheets, value rows 7 and 9
    monthly(DRUGS, 7),
    monthly(SUPPLIES, 7),
    monthly(DRUGS_AND_SUPPLIES, 7),
    monthly(DRUGS_AND_SUPPLIES, 9),
];

/// Column-A key for the dynamic annex rows, e.g. year 113 month 5 → "113/05"
pub fn month_key(year: u32, month: u32) -> String {
    format!("{year:03}/{month:02}")
}

/// Row-2 header for the month-column sheets, e.g. month 5 → "5月"
pub fn month_header(month: u32) -> String {
    format!("{month}月")
}

/// Extract the 34 raw field texts for `year`/`month`, in report order
pub fn extract(workbook: &mut Workbook, year: u32, month: u32) -> ScribeResult<Vec<String>> {
    let mut extractor = Extractor::new(workbook, year, month);
    let mut raw = Vec::with_capacity(FIELD_COUNT);
    for spec in &FIELD_SPECS {
        raw.push(extractor.resolve(spec)?);
    }
    Ok(raw)
}

/// Per-run extraction state: loaded sheet ranges plus the key rows and
/// header columns already resolved for them
struct Extractor<'a> {
    workbook: &'a mut Workbook,
    year: u32,
    month: u32,
    sheets: HashMap<String, Sheet>,
    key_rows: HashMap<String, u32>,
    header_columns: HashMap<String, u32>,
}

impl<'a> Extractor<'a> {
    fn new(workbook: &'a mut Workbook, year: u32, month: u32) -> Self {
        Self {
            workbook,
            year,
            month,
            sheets: HashMap::new(),
            key_rows: HashMap::new(),
            header_columns: HashMap::new(),
        }
    }

    fn resolve(&mut self, spec: &FieldSpec) -> ScribeResult<String> {
        match spec {
            FieldSpec::Fixed { sheet, address } => self.sheet(sheet)?.text(address),
            FieldSpec::KeyRow { sheet, column } => {
                let row = self.key_row(sheet)?;
                let col = column_number(column)?;
                Ok(self.sheet(sheet)?.text_at(row, col))
            }
            FieldSpec::MonthHeader { sheet, value_row } => {
                let col = self.header_column(sheet)?;
                Ok(self.sheet(sheet)?.text_at(*value_row, col))
            }
        }
    }

    fn sheet(&mut self, name: &str) -> ScribeResult<&Sheet> {
        if !self.sheets.contains_key(name) {
            let sheet = self.workbook.sheet(name)?;
            self.sheets.insert(name.to_string(), sheet);
        }
        Ok(&self.sheets[name])
    }

    fn key_row(&mut self, name: &str) -> ScribeResult<u32> {
        if let Some(&row) = self.key_rows.get(name) {
            return Ok(row);
        }
        let key = month_key(self.year, self.month);
        let row = self.sheet(name)?.find_key_row(&key)?;
        self.key_rows.insert(name.to_string(), row);
        Ok(row)
    }

    fn header_column(&mut self, name: &str) -> ScribeResult<u32> {
        if let Some(&col) = self.header_columns.get(name) {
            return Ok(col);
        }
        let header = month_header(self.month);
        let col = self.sheet(name)?.find_header_column(&header, HEADER_ROW)?;
        self.header_columns.insert(name.to_string(), col);
        Ok(col)
    }
}
