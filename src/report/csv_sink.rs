//! CSV report output.

use super::{cell, Report, ReportSink, FILE_COLUMN};
use crate::error::Result;
use std::io::Write;

/// Writes the report as comma-separated values with a header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvSink;

impl ReportSink for CsvSink {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let columns = report.columns();
        let mut writer = csv::Writer::from_writer(out);

        let mut header = Vec::with_capacity(columns.len() + 1);
        header.push(FILE_COLUMN);
        header.extend(columns.iter().copied());
        writer.write_record(&header)?;

        for record in report.records() {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(record.path.display().to_string());
            row.extend(columns.iter().map(|column| cell(record, column)));
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }
}
