//! Report rendering: value formatting, template substitution, DOCX output

pub mod docx;
pub mod formatter;
pub mod template;

pub use docx::write_docx;
pub use formatter::format_values;
pub use template::{fill, fill_strict, render_report, REPORT_TEMPLATE, TOKEN_COUNT};
