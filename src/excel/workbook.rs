//! Workbook access and cell location
//!
//! Wraps the calamine reader behind the three addressing schemes the report
//! needs: literal "A1" addresses, rows found by scanning column A for a
//! year/month key, and columns found by scanning a header row for a month
//! label. Both scans compare rendered cell text byte-for-byte; first match
//! in scan order wins.

use crate::error::{ScribeError, ScribeResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A read-only workbook handle, opened once per run
pub struct Workbook {
    path: PathBuf,
    reader: Xlsx<BufReader<File>>,
}

impl Workbook {
    /// Open an .xlsx workbook for extraction
    pub fn open<P: AsRef<Path>>(path: P) -> ScribeResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScribeError::FileNotFound(path.to_path_buf()));
        }
        let reader: Xlsx<_> =
            open_workbook(path).map_err(|source| ScribeError::InvalidFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            reader,
        })
    }

    /// Load the populated range of a named worksheet
    pub fn sheet(&mut self, name: &str) -> ScribeResult<Sheet> {
        if !self.reader.sheet_names().iter().any(|s| s == name) {
            return Err(ScribeError::WorksheetNotFound(name.to_string()));
        }
        let range =
            self.reader
                .worksheet_range(name)
                .map_err(|source| ScribeError::InvalidFormat {
                    path: self.path.clone(),
                    source,
                })?;
        Ok(Sheet {
            name: name.to_string(),
            range,
        })
    }
}

/// One worksheet's populated cell range
pub struct Sheet {
    name: String,
    range: Range<Data>,
}

impl Sheet {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered text of the cell at a literal "A1"-style address
    pub fn text(&self, address: &str) -> ScribeResult<String> {
        let (row, col) = parse_a1(address)?;
        Ok(self.text_at(row, col))
    }

    /// Rendered text of the cell at a 1-based (row, column) position.
    /// Blank or out-of-range cells read as the empty string.
    pub fn text_at(&self, row: u32, col: u32) -> String {
        self.range
            .get_value((row - 1, col - 1))
            .map(data_text)
            .unwrap_or_default()
    }

    /// Scan column A from the first to the last populated row and return the
    /// 1-based row whose text equals `key` exactly
    pub fn find_key_row(&self, key: &str) -> ScribeResult<u32> {
        if let (Some(start), Some(end)) = (self.range.start(), self.range.end()) {
            for row in start.0..=end.0 {
                if let Some(cell) = self.range.get_value((row, 0)) {
                    if data_text(cell) == key {
                        return Ok(row + 1);
                    }
                }
            }
        }
        Err(ScribeError::KeyRowNotFound {
            sheet: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// Scan `header_row` (1-based) from the first to the last populated
    /// column and return the 1-based column whose text equals `header`
    /// exactly
    pub fn find_header_column(&self, header: &str, header_row: u32) -> ScribeResult<u32> {
        if let (Some(start), Some(end)) = (self.range.start(), self.range.end()) {
            for col in start.1..=end.1 {
                if let Some(cell) = self.range.get_value((header_row - 1, col)) {
                    if data_text(cell) == header {
                        return Ok(col + 1);
                    }
                }
            }
        }
        Err(ScribeError::HeaderColumnNotFound {
            sheet: self.name.clone(),
            header: header.to_string(),
            row: header_row,
        })
    }
}

/// Rendered display text of a cell value
fn data_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        other => other.to_string(),
    }
}

/// Format a float the way it displays in the sheet: up to 6 decimal places,
/// trailing zeros removed, so 100.0 reads as "100"
fn float_text(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Convert column letters to a 1-based column number (A→1, Z→26, AA→27)
pub(crate) fn column_number(letters: &str) -> ScribeResult<u32> {
    if letters.is_empty() {
        return Err(ScribeError::InvalidCellAddress(letters.to_string()));
    }
    let mut n: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return Err(ScribeError::InvalidCellAddress(letters.to_string()));
        }
        n = n * 26 + (c as u32 - 'A' as u32 + 1);
    }
    Ok(n)
}

/// Parse an "A1"-style address into 1-based (row, column)
fn parse_a1(address: &str) -> ScribeResult<(u32, u32)> {
    let digits_at = address
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ScribeError::InvalidCellAddress(address.to_string()))?;
    let (letters, digits) = address.split_at(digits_at);
    let col = column_number(letters)?;
    let row: u32 = digits
        .parse()
        .map_err(|_| ScribeError::InvalidCellAddress(address.to_string()))?;
    if row == 0 {
        return Err(ScribeError::InvalidCellAddress(address.to_string()));
    }
    Ok((row, col))
}
