//! Excel workbook report output.

use super::{Report, ReportSink, FILE_COLUMN};
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::io::Write;

/// Writes the report as an `.xlsx` workbook with a single sheet.
///
/// Counts are numeric cells; a keyword that did not occur in a file leaves its
/// cell empty. The workbook records its creation time, so two runs do not
/// produce byte-identical files even when the cells match.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxSink;

impl ReportSink for XlsxSink {
    fn name(&self) -> &'static str {
        "xlsx"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let columns = report.columns();
        let header = Format::new().set_bold();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        sheet.write_string_with_format(0, 0, FILE_COLUMN, &header)?;
        for (col, column) in columns.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16 + 1, *column, &header)?;
        }

        for (index, record) in report.records().iter().enumerate() {
            let row = index as u32 + 1;
            sheet.write_string(row, 0, record.path.display().to_string())?;
            for (col, column) in columns.iter().enumerate() {
                if let Some(count) = record.counts.get(*column) {
                    sheet.write_number(row, col as u16 + 1, *count as f64)?;
                }
            }
        }

        out.write_all(&workbook.save_to_buffer()?)?;
        Ok(())
    }
}
