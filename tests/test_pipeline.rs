//! End-to-end tests: real PDFs in a temporary tree, counted and reported.

use pdf_keyword_audit::{
    run_audit, AuditConfig, Error, KeywordAudit, KeywordSet, PdfTextExtractor, ReportFormat,
    TextSource,
};
use pdf_oxide::api::Pdf;
use pdf_oxide::writer::{DocumentBuilder, PageSize};
use pdf_oxide::PdfDocument;
use std::fs;
use std::path::Path;

/// Write a one-page PDF containing `text` to `root/relative`.
fn write_pdf(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directory");
    }
    let pdf = Pdf::from_text(text).expect("Failed to create PDF");
    fs::write(&path, pdf.into_bytes()).expect("Failed to write PDF");
}

/// Write a PDF with one page per entry of `pages`.
fn write_multipage_pdf(path: &Path, pages: &[&str]) {
    let mut builder = DocumentBuilder::new();
    for text in pages {
        let page = builder.page(PageSize::Letter);
        page.at(72.0, 720.0).text(text).done();
    }
    let bytes = builder.build().expect("Failed to build PDF");
    fs::write(path, bytes).expect("Failed to write PDF");
}

fn keywords(list: &[&str]) -> KeywordSet {
    KeywordSet::new(list.iter().copied()).unwrap()
}

#[test]
fn test_extractor_reads_generated_pdf() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(dir.path(), "log.pdf", "Kick taken at 2500 m");

    let text = PdfTextExtractor::new()
        .extract(&dir.path().join("log.pdf"))
        .expect("Extraction failed");
    assert!(text.to_lowercase().contains("kick"), "extracted: {:?}", text);
}

#[test]
fn test_multipage_text_joined_in_page_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daily.pdf");
    write_multipage_pdf(
        &path,
        &["Day one: kick taken", "Day two: lost returns", "Day three: leak at BOP"],
    );

    let doc = PdfDocument::open(&path).expect("Failed to open PDF");
    assert_eq!(doc.page_count().expect("Failed to count pages"), 3);
    drop(doc);

    let text = PdfTextExtractor::new()
        .extract(&path)
        .expect("Extraction failed")
        .to_lowercase();
    let kick = text.find("kick").expect("page 1 text missing");
    let lost = text.find("lost").expect("page 2 text missing");
    let leak = text.find("leak").expect("page 3 text missing");
    assert!(kick < lost && lost < leak, "pages out of order: {:?}", text);

    let outcome = KeywordAudit::new(keywords(&["kick", "lost", "leak"]))
        .run(dir.path(), &mut PdfTextExtractor::new())
        .unwrap();
    let record = &outcome.report.records()[0];
    assert_eq!(record.count("kick"), 1);
    assert_eq!(record.count("lost"), 1);
    assert_eq!(record.count("leak"), 1);
}

#[test]
fn test_long_document_counts_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let text: String = (1..=200).map(|i| format!("Line {}: kick observed\n", i)).collect();
    write_pdf(dir.path(), "long.pdf", &text);

    let outcome = KeywordAudit::new(keywords(&["kick"]))
        .run(dir.path(), &mut PdfTextExtractor::new())
        .unwrap();
    assert_eq!(outcome.totals.get("kick"), 200);
}

#[test]
fn test_report_column_union() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("logs");
    write_pdf(&root, "a.pdf", "Leak found at the flange");
    write_pdf(&root, "b.pdf", "Kick taken while tripping");

    let output = dir.path().join("counts.csv");
    let config = AuditConfig::new(&root, &output).with_keywords(keywords(&["leak", "kick"]));
    let outcome = run_audit(&config).expect("Audit failed");

    let records = outcome.report.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].path.ends_with("a.pdf"));
    assert!(records[0].count("leak") >= 1);
    assert!(!records[0].counts.contains_key("kick"));
    assert!(records[1].count("kick") >= 1);
    assert!(!records[1].counts.contains_key("leak"));

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("file,leak,kick"));
    let row_a = lines.next().unwrap();
    let row_b = lines.next().unwrap();
    assert!(row_a.ends_with(','), "kick cell for a.pdf should be blank: {}", row_a);
    assert!(row_b.contains(",,"), "leak cell for b.pdf should be blank: {}", row_b);
}

#[test]
fn test_corrupt_pdf_is_skipped_without_changing_totals() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("logs");
    write_pdf(&root, "a.pdf", "Lost returns, losing mud");
    write_pdf(&root, "sub/b.pdf", "Lost circulation zone");

    let audit = KeywordAudit::new(KeywordSet::default());
    let clean = audit.run(&root, &mut PdfTextExtractor::new()).unwrap();

    fs::write(root.join("sub/broken.pdf"), b"this is not a pdf at all").unwrap();
    fs::write(root.join("notes.PDF"), "plain text saved with the wrong extension").unwrap();
    let with_corrupt = audit.run(&root, &mut PdfTextExtractor::new()).unwrap();

    assert_eq!(clean.totals, with_corrupt.totals);
    assert_eq!(clean.report, with_corrupt.report);
    assert!(clean.totals.get("lost") >= 2);
    assert_eq!(with_corrupt.failures.len(), 2);
    assert_eq!(with_corrupt.documents_seen(), 4);
    assert!(with_corrupt.failures.iter().all(|f| !f.path.ends_with("a.pdf")));
}

#[test]
fn test_totals_equal_sum_of_records() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(dir.path(), "one.pdf", "Flowing gas detected, FLOW continues");
    write_pdf(dir.path(), "two.pdf", "ISIP recorded after DFIT. No leak.");
    write_pdf(dir.path(), "three.pdf", "Routine day, nothing to report");

    let outcome = KeywordAudit::new(KeywordSet::default())
        .run(dir.path(), &mut PdfTextExtractor::new())
        .unwrap();

    assert_eq!(outcome.report.len(), 3);
    for (keyword, total) in outcome.totals.iter() {
        let sum: u64 = outcome.report.records().iter().map(|r| r.count(keyword)).sum();
        assert_eq!(total, sum, "totals mismatch for {}", keyword);
    }
}

#[test]
fn test_rerun_produces_identical_report() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("logs");
    write_pdf(&root, "a.pdf", "Balloon effect suspected");
    write_pdf(&root, "b/c.pdf", "Kick, then lost returns");

    for format in [ReportFormat::Csv, ReportFormat::Json, ReportFormat::Markdown] {
        let output = dir.path().join("report.out");
        let config = AuditConfig::new(&root, &output).with_format(format);

        run_audit(&config).unwrap();
        let first = fs::read(&output).unwrap();
        run_audit(&config).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second, "{:?} report differs between runs", format);
    }
}

#[test]
fn test_missing_root_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("counts.csv");
    let config = AuditConfig::new(dir.path().join("absent"), &output);

    let err = run_audit(&config).unwrap_err();
    assert!(matches!(err, Error::InputRoot { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(dir.path(), "a.pdf", "Kick");
    let output = dir.path().join("no_such_dir").join("counts.csv");

    let err = run_audit(&AuditConfig::new(dir.path(), &output)).unwrap_err();
    assert!(matches!(err, Error::ReportWrite { .. }));
    assert!(!output.exists());
}
