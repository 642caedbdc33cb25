//! Markdown table report output.

use super::{cell, Report, ReportSink, FILE_COLUMN};
use crate::error::Result;
use std::io::Write;

/// Writes the report as a GitHub-flavoured Markdown table.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownSink;

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ReportSink for MarkdownSink {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let columns = report.columns();

        let mut header = format!("| {} |", FILE_COLUMN);
        let mut rule = String::from("| --- |");
        for column in &columns {
            header.push_str(&format!(" {} |", escape_cell(column)));
            rule.push_str(" ---: |");
        }
        writeln!(out, "{}", header)?;
        writeln!(out, "{}", rule)?;

        for record in report.records() {
            let mut line = format!("| {} |", escape_cell(&record.path.display().to_string()));
            for column in &columns {
                line.push_str(&format!(" {} |", cell(record, column)));
            }
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }
}
