//! Configuration for a keyword audit run.

use crate::error::{Error, Result};
use crate::keywords::KeywordSet;
use crate::report::{CsvSink, JsonSink, MarkdownSink, ReportSink, XlsxSink};
use std::path::{Path, PathBuf};

/// Output format of the per-file report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Comma-separated values, opens in any spreadsheet
    Csv,
    /// Pretty-printed JSON array of row objects
    Json,
    /// GitHub-flavoured Markdown table
    Markdown,
    /// Excel workbook
    Xlsx,
}

impl ReportFormat {
    /// Infer the format from a destination file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("no extension on {}", path.display()))
            })?;
        Self::from_name(ext)
    }

    /// Parse a format name (`csv`, `json`, `md`/`markdown`, `xlsx`), ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "xlsx" => Ok(ReportFormat::Xlsx),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Sink that writes this format.
    pub fn sink(&self) -> Box<dyn ReportSink> {
        match self {
            ReportFormat::Csv => Box::new(CsvSink),
            ReportFormat::Json => Box::new(JsonSink),
            ReportFormat::Markdown => Box::new(MarkdownSink),
            ReportFormat::Xlsx => Box::new(XlsxSink),
        }
    }
}

/// Everything a run needs: what to look for, where, and where to write the result.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Keywords to count.
    pub keywords: KeywordSet,

    /// Directory scanned recursively for PDFs.
    pub input_root: PathBuf,

    /// Report destination, overwritten on each run.
    pub output_path: PathBuf,

    /// Report format; inferred from `output_path` when `None`.
    pub format: Option<ReportFormat>,

    /// Follow symbolic links while scanning.
    pub follow_links: bool,
}

impl AuditConfig {
    /// Create a configuration with the default keyword set.
    pub fn new(input_root: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            keywords: KeywordSet::default(),
            input_root: input_root.into(),
            output_path: output_path.into(),
            format: None,
            follow_links: false,
        }
    }

    /// Replace the keyword set.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Force a report format instead of inferring it.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Follow symbolic links while scanning.
    pub fn with_follow_links(mut self, enable: bool) -> Self {
        self.follow_links = enable;
        self
    }

    /// The format to write, explicit or inferred from the output path.
    pub fn report_format(&self) -> Result<ReportFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => ReportFormat::from_path(&self.output_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AuditConfig::new("reports", "out/keyword_counts.csv");
        assert_eq!(config.keywords, KeywordSet::default());
        assert_eq!(config.input_root, PathBuf::from("reports"));
        assert!(config.format.is_none());
        assert!(!config.follow_links);
        assert_eq!(config.report_format().unwrap(), ReportFormat::Csv);
    }

    #[test]
    fn test_config_builder() {
        let keywords = KeywordSet::new(["kick"]).unwrap();
        let config = AuditConfig::new("in", "out.txt")
            .with_keywords(keywords.clone())
            .with_format(ReportFormat::Json)
            .with_follow_links(true);

        assert_eq!(config.keywords, keywords);
        assert!(config.follow_links);
        assert_eq!(config.report_format().unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("a.CSV")).unwrap(), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("a.json")).unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("a.md")).unwrap(), ReportFormat::Markdown);
        assert_eq!(ReportFormat::from_path(Path::new("a.XLSX")).unwrap(), ReportFormat::Xlsx);
        assert!(matches!(
            ReportFormat::from_path(Path::new("a.xls")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(ReportFormat::from_path(Path::new("report")).is_err());
    }
}
