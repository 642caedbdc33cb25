//! Recursive discovery of PDF files under a root directory.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a path has a `.pdf` extension, ignoring case.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Collect every PDF file below `root`, recursing into all subdirectories.
///
/// Entries are visited depth-first with each directory's children sorted by file
/// name, so the order is stable across runs. Entries that cannot be read are
/// skipped with a warning. A symbolic link to a file is listed under the link's
/// path even when `follow_links` is off; broken links are skipped with a warning.
///
/// # Errors
///
/// Returns [`Error::InputRoot`] if `root` does not exist or is not a directory.
pub fn discover_pdfs(root: &Path, follow_links: bool) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| Error::InputRoot {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(Error::InputRoot {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut pdfs = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                log::warn!("Skipping unreadable entry {}: {}", path, Error::Walk(e));
                continue;
            },
        };

        if !is_pdf_path(entry.path()) {
            continue;
        }

        let is_file = if entry.path_is_symlink() && !entry.file_type().is_file() {
            match fs::metadata(entry.path()) {
                Ok(target) => target.is_file(),
                Err(e) => {
                    log::warn!("Skipping broken link {}: {}", entry.path().display(), e);
                    false
                },
            }
        } else {
            entry.file_type().is_file()
        };

        if is_file {
            log::debug!("Discovered {}", entry.path().display());
            pdfs.push(entry.into_path());
        }
    }

    Ok(pdfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_path() {
        assert!(is_pdf_path(Path::new("a.pdf")));
        assert!(is_pdf_path(Path::new("dir/c.PDF")));
        assert!(is_pdf_path(Path::new("mixed.Pdf")));
        assert!(!is_pdf_path(Path::new("d.txt")));
        assert!(!is_pdf_path(Path::new("pdf")));
        assert!(!is_pdf_path(Path::new("archive.pdf.gz")));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = discover_pdfs(Path::new("/definitely/not/a/real/root"), false).unwrap_err();
        assert!(matches!(err, Error::InputRoot { .. }));
    }
}
