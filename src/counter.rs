//! Keyword counting over extracted document text.
//!
//! Matching is case-insensitive plain substring search: the document text is
//! lower-cased and each keyword's non-overlapping occurrences are counted left to
//! right. There is no word-boundary check, so `"flow"` matches inside `"Flowing"`.

use crate::keywords::KeywordSet;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Count non-overlapping occurrences of `needle` in `haystack`, scanning left to right.
///
/// An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> u64 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u64
}

/// Per-keyword counts for one document, omitting keywords that do not occur.
///
/// Entries follow the keyword set's order.
pub fn count_keywords(text: &str, keywords: &KeywordSet) -> IndexMap<String, u64> {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .filter_map(|kw| {
            let count = count_occurrences(&lowered, kw);
            (count > 0).then(|| (kw.to_string(), count))
        })
        .collect()
}

/// One report row: a document path and its positive keyword counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path of the document as discovered.
    pub path: PathBuf,
    /// Keyword counts; keywords with zero occurrences are absent.
    pub counts: IndexMap<String, u64>,
}

impl FileRecord {
    /// Count for `keyword`, treating absence as zero.
    pub fn count(&self, keyword: &str) -> u64 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }
}

/// Run-wide occurrence totals, one entry per keyword in set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTotals {
    counts: IndexMap<String, u64>,
}

impl KeywordTotals {
    /// Zeroed totals for every keyword in `keywords`.
    pub fn new(keywords: &KeywordSet) -> Self {
        Self {
            counts: keywords.iter().map(|kw| (kw.to_string(), 0)).collect(),
        }
    }

    /// Add a document's counts.
    pub fn add(&mut self, record: &FileRecord) {
        for (keyword, count) in &record.counts {
            *self.counts.entry(keyword.clone()).or_insert(0) += count;
        }
    }

    /// Total for `keyword`, zero if it is not tracked.
    pub fn get(&self, keyword: &str) -> u64 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// Iterate `(keyword, total)` in keyword set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(kw, count)| (kw.as_str(), *count))
    }

    /// Sum of all totals.
    pub fn grand_total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Counts keywords document by document and keeps the running totals.
#[derive(Debug, Clone)]
pub struct KeywordCounter {
    keywords: KeywordSet,
    totals: KeywordTotals,
}

impl KeywordCounter {
    /// Create a counter with zeroed totals.
    pub fn new(keywords: KeywordSet) -> Self {
        let totals = KeywordTotals::new(&keywords);
        Self { keywords, totals }
    }

    /// Count one document's text and fold the result into the totals.
    pub fn count_document(&mut self, path: &Path, text: &str) -> FileRecord {
        let record = FileRecord {
            path: path.to_path_buf(),
            counts: count_keywords(text, &self.keywords),
        };
        self.totals.add(&record);
        record
    }

    /// Keywords being counted.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Totals so far.
    pub fn totals(&self) -> &KeywordTotals {
        &self.totals
    }

    /// Consume the counter, returning the final totals.
    pub fn into_totals(self) -> KeywordTotals {
        self.totals
    }
}
