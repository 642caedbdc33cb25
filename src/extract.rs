//! Plain-text extraction from PDF documents.
//!
//! Parsing is delegated to [`pdf_oxide`]. The extractor only opens the document,
//! walks its pages in order and joins their text.

use crate::error::Result;
use pdf_oxide::PdfDocument;
use std::path::Path;

/// A source of document text.
///
/// The pipeline only needs "path in, text out"; tests inject canned text through
/// this trait instead of building PDFs.
pub trait TextSource {
    /// Extract the full text of the document at `path`.
    ///
    /// An `Err` marks the document as failed; the caller skips it.
    fn extract(&mut self, path: &Path) -> Result<String>;
}

/// Extracts text from PDF files with `pdf_oxide`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PdfTextExtractor {
    fn extract(&mut self, path: &Path) -> Result<String> {
        // The document (and its file handle) is dropped when this returns.
        let doc = PdfDocument::open(path)?;
        let page_count = doc.page_count()?;
        log::debug!("{}: {} pages", path.display(), page_count);

        Ok(join_pages(path, page_count, |page_index| doc.extract_text(page_index)))
    }
}

/// Concatenate the text of pages `0..page_count` in order, with no separator.
///
/// A page whose text cannot be extracted is logged and contributes nothing.
pub fn join_pages<F>(path: &Path, page_count: usize, mut page_text: F) -> String
where
    F: FnMut(usize) -> pdf_oxide::Result<String>,
{
    let mut text = String::new();
    for page_index in 0..page_count {
        match page_text(page_index) {
            Ok(page) => text.push_str(&page),
            Err(e) => {
                log::warn!(
                    "{}: could not extract text from page {}: {}",
                    path.display(),
                    page_index + 1,
                    e
                );
            },
        }
    }
    text
}
