//! Per-file keyword report and the sinks that persist it.
//!
//! A [`Report`] is the ordered list of [`FileRecord`]s produced by a run. Its
//! columns are the union of keywords that matched anywhere, in the order they were
//! first seen. A [`ReportSink`] renders the table in one format:
//!
//! ```text
//! file,kick,leak
//! logs/a.pdf,,3
//! logs/b.pdf,1,
//! ```
//!
//! Missing counts are left blank, never written as zero.

mod csv_sink;
mod json_sink;
mod markdown_sink;
mod xlsx_sink;

pub use csv_sink::CsvSink;
pub use json_sink::JsonSink;
pub use markdown_sink::MarkdownSink;
pub use xlsx_sink::XlsxSink;

use crate::counter::FileRecord;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name of the column holding the document path.
pub const FILE_COLUMN: &str = "file";

/// Ordered per-file results of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<FileRecord>,
}

impl Report {
    /// Create a report from records in enumeration order.
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self { records }
    }

    /// Append a record.
    pub fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    /// Records in the order they were produced.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keyword columns: every keyword with a count in at least one record,
    /// in first-encountered order.
    pub fn columns(&self) -> Vec<&str> {
        let columns: IndexSet<&str> = self
            .records
            .iter()
            .flat_map(|record| record.counts.keys().map(String::as_str))
            .collect();
        columns.into_iter().collect()
    }
}

/// A destination format for a [`Report`].
pub trait ReportSink {
    /// Short format name used in log output.
    fn name(&self) -> &'static str;

    /// Render the full report into `out`.
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()>;

    /// Write the report to `path`, replacing any existing file.
    ///
    /// The report is rendered into a temporary file next to `path` and moved into
    /// place only once rendering succeeded, so a failed write never leaves a
    /// truncated report behind.
    fn write(&self, report: &Report, path: &Path) -> Result<()> {
        write_atomically(path, |out| self.render(report, out))?;
        log::info!("Wrote {} report with {} rows to {}", self.name(), report.len(), path.display());
        Ok(())
    }
}

/// Mode for a report that does not replace an existing file, before the umask.
#[cfg(unix)]
const NEW_REPORT_MODE: u32 = 0o644;

/// Run `render` against a temporary file and persist it over `path` on success.
///
/// A replaced report keeps its permissions; a new one is created like any
/// other user file (`0o644` less the umask) rather than owner-only.
pub fn write_atomically<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let write_error = |source: std::io::Error| Error::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let previous = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_REPORT_MODE));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(write_error)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        render(&mut writer)?;
        writer.flush().map_err(write_error)?;
    }

    if let Some(permissions) = previous {
        tmp.as_file().set_permissions(permissions).map_err(write_error)?;
    }
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Cell text for `column` in `record`: the count, or empty when absent.
pub(crate) fn cell(record: &FileRecord, column: &str) -> String {
    record
        .counts
        .get(column)
        .map(|count| count.to_string())
        .unwrap_or_default()
}
