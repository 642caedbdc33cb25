//! JSON report output.

use super::{Report, ReportSink, FILE_COLUMN};
use crate::counter::FileRecord;
use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;

/// Writes the report as a pretty-printed JSON array, one object per file.
///
/// Every object carries `"file"` followed by all report columns; a keyword that
/// did not occur in that file is `null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSink;

struct JsonRow<'a> {
    record: &'a FileRecord,
    columns: &'a [&'a str],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry(FILE_COLUMN, &self.record.path.display().to_string())?;
        for column in self.columns {
            map.serialize_entry(column, &self.record.counts.get(*column))?;
        }
        map.end()
    }
}

impl ReportSink for JsonSink {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let columns = report.columns();
        let rows: Vec<JsonRow<'_>> = report
            .records()
            .iter()
            .map(|record| JsonRow {
                record,
                columns: &columns,
            })
            .collect();

        serde_json::to_writer_pretty(&mut *out, &rows)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::record;
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_missing_keywords_are_null() {
        let report = Report::new(vec![
            record("a.pdf", &[("leak", 3)]),
            record("b.pdf", &[("kick", 1)]),
        ]);
        let mut buf = Vec::new();
        JsonSink.render(&report, &mut buf).unwrap();

        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            json!([
                {"file": "a.pdf", "leak": 3, "kick": null},
                {"file": "b.pdf", "leak": null, "kick": 1},
            ])
        );
    }

    #[test]
    fn test_file_key_comes_first() {
        let report = Report::new(vec![record("a.pdf", &[("leak", 3)])]);
        let mut buf = Vec::new();
        JsonSink.render(&report, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let file_pos = text.find("\"file\"").unwrap();
        let leak_pos = text.find("\"leak\"").unwrap();
        assert!(file_pos < leak_pos);
    }
}
