use std::path::PathBuf;
use thiserror::Error;

pub type ScribeResult<T> = Result<T, ScribeError>;

#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("cannot open workbook {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    #[error("worksheet 「{0}」 not found")]
    WorksheetNotFound(String),

    #[error("no row in column A of worksheet 「{sheet}」 matches 「{key}」")]
    KeyRowNotFound { sheet: String, key: String },

    #[error("no column in row {row} of worksheet 「{sheet}」 matches 「{header}」")]
    HeaderColumnNotFound {
        sheet: String,
        header: String,
        row: u32,
    },

    #[error("invalid cell address: {0}")]
    InvalidCellAddress(String),

    #[error("template has {markers} placeholders but {tokens} tokens were supplied")]
    TokenCountMismatch { markers: usize, tokens: usize },

    #[error("expected {expected} report values, got {actual}")]
    ValueCountInvariant { expected: usize, actual: usize },

    #[error("DOCX write error: {0}")]
    Docx(#[from] zip::result::ZipError),
}
