//! The audit pipeline: discover, extract, count, tabulate.
//!
//! ```text
//! input root
//!     ↓
//! [discover_pdfs] (sorted, recursive, *.pdf)
//!     ↓
//! [TextSource] per file ──(error)──→ FailedDocument, warning
//!     ↓
//! [KeywordCounter] → FileRecord + running KeywordTotals
//!     ↓
//! Report → [ReportSink]
//! ```
//!
//! Documents are processed one at a time in discovery order. A document that fails
//! extraction adds nothing to the totals and produces no report row.

use crate::config::AuditConfig;
use crate::counter::{KeywordCounter, KeywordTotals};
use crate::discovery::discover_pdfs;
use crate::error::{Error, Result};
use crate::extract::{PdfTextExtractor, TextSource};
use crate::keywords::KeywordSet;
use crate::report::{Report, ReportSink};
use std::path::{Path, PathBuf};

/// A document that was discovered but could not be read.
#[derive(Debug)]
pub struct FailedDocument {
    /// Path of the document.
    pub path: PathBuf,
    /// Why extraction failed.
    pub error: Error,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct AuditOutcome {
    /// Occurrence totals per keyword across all readable documents.
    pub totals: KeywordTotals,
    /// One row per readable document, in discovery order.
    pub report: Report,
    /// Documents skipped because extraction failed.
    pub failures: Vec<FailedDocument>,
}

impl AuditOutcome {
    /// Number of documents discovered, readable or not.
    pub fn documents_seen(&self) -> usize {
        self.report.len() + self.failures.len()
    }

    /// Whether any document was skipped.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Persist the report with `sink`, overwriting `path`.
    pub fn write_report(&self, sink: &dyn ReportSink, path: &Path) -> Result<()> {
        sink.write(&self.report, path)
    }
}

/// Counts a keyword set across every PDF under a directory.
#[derive(Debug, Clone)]
pub struct KeywordAudit {
    keywords: KeywordSet,
    follow_links: bool,
}

impl KeywordAudit {
    /// Create an audit for `keywords`.
    pub fn new(keywords: KeywordSet) -> Self {
        Self {
            keywords,
            follow_links: false,
        }
    }

    /// Follow symbolic links during discovery.
    pub fn with_follow_links(mut self, enable: bool) -> Self {
        self.follow_links = enable;
        self
    }

    /// Keywords this audit counts.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Scan `root` and count keywords in every PDF found, reading text from `source`.
    ///
    /// # Errors
    ///
    /// Only a missing or unreadable `root` fails the run. Per-document failures
    /// are logged and collected in [`AuditOutcome::failures`].
    pub fn run(&self, root: &Path, source: &mut dyn TextSource) -> Result<AuditOutcome> {
        let paths = discover_pdfs(root, self.follow_links)?;
        log::info!("Found {} PDF files under {}", paths.len(), root.display());
        Ok(self.run_paths(paths, source))
    }

    /// Count keywords in an explicit list of documents, in the given order.
    pub fn run_paths<I>(&self, paths: I, source: &mut dyn TextSource) -> AuditOutcome
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut counter = KeywordCounter::new(self.keywords.clone());
        let mut report = Report::default();
        let mut failures = Vec::new();

        for path in paths {
            match source.extract(&path) {
                Ok(text) => {
                    let record = counter.count_document(&path, &text);
                    log::debug!(
                        "{}: {} characters, {} keywords matched",
                        path.display(),
                        text.len(),
                        record.counts.len()
                    );
                    report.push(record);
                },
                Err(error) => {
                    log::warn!("Skipping unreadable PDF {}: {}", path.display(), error);
                    failures.push(FailedDocument { path, error });
                },
            }
        }

        let totals = counter.into_totals();
        log::info!(
            "Counted {} keyword occurrences in {} documents ({} skipped)",
            totals.grand_total(),
            report.len(),
            failures.len()
        );
        for (keyword, total) in totals.iter() {
            log::info!("  {}: {}", keyword, total);
        }

        AuditOutcome {
            totals,
            report,
            failures,
        }
    }
}

/// Run a full audit from configuration: scan, count with `pdf_oxide`, write the report.
///
/// The report format is resolved before scanning so a bad output extension fails
/// fast. Nothing is written if the scan fails.
pub fn run_audit(config: &AuditConfig) -> Result<AuditOutcome> {
    let sink = config.report_format()?.sink();
    let audit = KeywordAudit::new(config.keywords.clone()).with_follow_links(config.follow_links);

    let mut extractor = PdfTextExtractor::new();
    let outcome = audit.run(&config.input_root, &mut extractor)?;
    outcome.write_report(sink.as_ref(), &config.output_path)?;
    Ok(outcome)
}
