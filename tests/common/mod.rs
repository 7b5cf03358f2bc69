//! Shared fixture workbook for integration tests
//!
//! Builds an .xlsx with the six worksheets the extractor reads, populated
//! for 民國113年5月. Annex values are written as 1001..1013 and 2001..2007
//! in report order so tests can assert positions directly.

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

pub const YEAR: u32 = 113;
pub const MONTH: u32 = 5;

/// 0-based column indices of the 附件 會計 reads (I,B,L,E,N,J,C,M,F,O,H,K,P)
const ACCOUNTING_COLS: [u16; 13] = [8, 1, 11, 4, 13, 9, 2, 12, 5, 14, 7, 10, 15];
/// 0-based column indices of the 藥衛材(不含花榮) reads (D,K,N,G,Q,H,R)
const SUPPLIES_COLS: [u16; 7] = [3, 10, 13, 6, 16, 7, 17];

/// Write the full six-sheet fixture workbook
pub fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();

    write_headquarters(workbook.add_worksheet());
    write_accounting_annex(workbook.add_worksheet());
    write_supplies_annex(workbook.add_worksheet());
    write_month_sheet(workbook.add_worksheet(), "藥品", 6, 123.456);
    // unparseable month value: degrades to 0.00 instead of failing
    let supplies = workbook.add_worksheet();
    supplies.set_name("衛材").unwrap();
    supplies.write_string(1, 0, " 5月").unwrap();
    supplies.write_string(1, 1, "5月").unwrap();
    supplies.write_string(6, 1, "abc").unwrap();
    write_drug_supplies(workbook.add_worksheet());

    workbook.save(path).unwrap();
}

/// 主計室: fixed cells in row 7
pub fn write_headquarters(ws: &mut Worksheet) {
    ws.set_name("主計室").unwrap();
    ws.write_number(6, 1, 1234567.0).unwrap(); // B7
    ws.write_number(6, 2, 0.1234).unwrap(); // C7
    ws.write_number(6, 3, 890.0).unwrap(); // D7
    ws.write_number(6, 5, 0.056).unwrap(); // F7
    ws.write_number(6, 7, 2500000.0).unwrap(); // H7
    ws.write_number(6, 8, 100.0).unwrap(); // I7
    ws.write_number(6, 9, 0.5).unwrap(); // J7
    // K7 left blank
    ws.write_string(6, 11, "N/A").unwrap(); // L7
    ws.write_number(6, 13, 42.0).unwrap(); // N7
}

/// 附件 會計: key rows in column A; values 1001..1013 in report order.
/// A second 113/05 row carries sentinel values - first match must win.
pub fn write_accounting_annex(ws: &mut Worksheet) {
    ws.set_name("附件 會計").unwrap();
    ws.write_string(3, 0, "113/04").unwrap();
    ws.write_string(4, 0, "113/05").unwrap();
    ws.write_string(6, 0, "113/05").unwrap();
    for (i, &col) in ACCOUNTING_COLS.iter().enumerate() {
        ws.write_number(4, col, 1001.0 + i as f64).unwrap();
        ws.write_number(6, col, 9999.0).unwrap();
    }
}

/// 藥衛材(不含花榮): key row at a different position; values 2001..2007
pub fn write_supplies_annex(ws: &mut Worksheet) {
    ws.set_name("藥衛材(不含花榮)").unwrap();
    ws.write_string(2, 0, "113/03").unwrap();
    ws.write_string(5, 0, "113/05").unwrap();
    for (i, &col) in SUPPLIES_COLS.iter().enumerate() {
        ws.write_number(5, col, 2001.0 + i as f64).unwrap();
    }
}

/// A month-column sheet: headers in row 2, value in row 7
pub fn write_month_sheet(ws: &mut Worksheet, name: &str, value_row: u32, value: f64) {
    ws.set_name(name).unwrap();
    ws.write_string(1, 2, "4月").unwrap();
    ws.write_string(1, 3, "5月").unwrap();
    ws.write_number(value_row, 3, value).unwrap();
}

/// 藥衛: month columns with values in both row 7 and row 9
pub fn write_drug_supplies(ws: &mut Worksheet) {
    ws.set_name("藥衛").unwrap();
    ws.write_string(1, 1, "4月").unwrap();
    ws.write_string(1, 2, "5月").unwrap();
    ws.write_number(6, 2, 77.0).unwrap();
    ws.write_number(8, 2, 0.4567).unwrap();
}
