//! # PDF Keyword Audit
//!
//! Scan a directory tree for PDF documents, extract their text and tally how often
//! each of a list of keywords occurs, both in total and per file.
//!
//! Built for auditing batches of well-log and drilling reports for operational terms
//! (`kick`, `leak`, `lost`, `isip`, ...).
//!
//! ## Matching
//!
//! Matching is case-insensitive plain substring counting over the whole document
//! text. There are no word boundaries: `"flow"` counts once inside `"Flowing"`, and
//! `"fit"` also matches inside `"dfit"`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_keyword_audit::{AuditConfig, KeywordSet, run_audit};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keywords = KeywordSet::new(["kick", "leak", "lost"])?;
//! let config = AuditConfig::new("well_logs", "keyword_counts.csv").with_keywords(keywords);
//!
//! let outcome = run_audit(&config)?;
//! for (keyword, total) in outcome.totals.iter() {
//!     println!("{keyword}: {total}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;
pub mod keywords;

// Pipeline stages
pub mod counter;
pub mod discovery;
pub mod extract;
pub mod pipeline;

// Report output
pub mod report;

// Re-exports
pub use config::{AuditConfig, ReportFormat};
pub use counter::{FileRecord, KeywordCounter, KeywordTotals};
pub use discovery::discover_pdfs;
pub use error::{Error, Result};
pub use extract::{PdfTextExtractor, TextSource};
pub use keywords::KeywordSet;
pub use pipeline::{run_audit, AuditOutcome, FailedDocument, KeywordAudit};
pub use report::{CsvSink, JsonSink, MarkdownSink, Report, ReportSink, XlsxSink};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
