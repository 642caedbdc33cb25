//! The ordered set of keywords searched for in document text.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Keywords matched by default, as used for well-log and drilling report audits.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "balloon", "dfit", "fit", "flar", "flow", "flowing", "gais", "isip", "kick", "leak", "loss",
    "losing", "lost", "lot", "return",
];

/// An ordered, duplicate-free list of lowercase keywords.
///
/// Keywords are matched as plain substrings, so `"fit"` also counts inside
/// `"dfit"` and `"outfit"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
        }
    }
}

impl KeywordSet {
    /// Build a keyword set from arbitrary strings.
    ///
    /// Each entry is trimmed and lower-cased. Later duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyword`] for an entry that is empty after trimming,
    /// and [`Error::EmptyKeywordSet`] when no keywords are given.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in keywords {
            let raw = raw.as_ref();
            let keyword = raw.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(Error::InvalidKeyword(raw.to_string()));
            }
            if normalized.contains(&keyword) {
                log::warn!("Ignoring duplicate keyword '{}'", keyword);
                continue;
            }
            normalized.push(keyword);
        }

        if normalized.is_empty() {
            return Err(Error::EmptyKeywordSet);
        }

        Ok(Self {
            keywords: normalized,
        })
    }

    /// Read keywords from a file, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(read_keyword_file(path)?)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set has no keywords. Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate keywords in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Whether `keyword` is in the set (compared after lower-casing).
    pub fn contains(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.keywords.iter().any(|kw| *kw == keyword)
    }
}

/// Read the raw keyword entries of a keywords file, without normalizing them.
pub fn read_keyword_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(parse_keyword_lines(&contents).into_iter().map(str::to_string).collect())
}

/// Extract keyword entries from the contents of a keywords file.
pub fn parse_keyword_lines(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
