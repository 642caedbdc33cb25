//! Error types for the keyword audit.
//!
//! Per-document failures (`Pdf`, `Io` while reading a document) are recovered by the
//! pipeline; everything else aborts the run.

use std::path::PathBuf;

/// Result type alias for keyword audit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while auditing a directory of PDFs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input root is missing, unreadable or not a directory
    #[error("Cannot scan input root {}: {reason}", .path.display())]
    InputRoot {
        /// Root directory that was requested
        path: PathBuf,
        /// Why it cannot be scanned
        reason: String,
    },

    /// Directory traversal error
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// PDF could not be parsed
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_oxide::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Keyword that cannot be matched meaningfully
    #[error("Invalid keyword: {0:?}")]
    InvalidKeyword(String),

    /// No keywords to search for
    #[error("Keyword set is empty")]
    EmptyKeywordSet,

    /// Report format could not be determined
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Excel workbook serialization error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Report destination could not be written
    #[error("Failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
