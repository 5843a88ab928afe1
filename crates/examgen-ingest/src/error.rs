use std::path::PathBuf;

use thiserror::Error;

use examgen_model::ExamError;

/// Errors that can occur while loading an item bank.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file extension names no supported format.
    #[error("unsupported item-bank format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The workbook has no worksheet to read.
    #[error("no worksheet found in {path}")]
    MissingWorksheet { path: PathBuf },

    /// CSV parsing failed.
    #[error("read {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    /// XLSX parsing failed.
    #[error("read {path}: {source}")]
    Xlsx {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    /// The loaded rows do not form a valid bank.
    #[error(transparent)]
    Bank(#[from] ExamError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
