// ABOUTME: Local resource loading for the scraper.
// ABOUTME: Reads the pre-downloaded page as UTF-8 and maps failures to ScrapeError.

use std::fs;
use std::path::Path;

use crate::error::ScrapeError;

/// Reads the page at `path` as UTF-8 text.
///
/// A missing file, a permission error, and invalid UTF-8 all surface as
/// [`ScrapeError::Read`]. An empty file reads back as an empty string;
/// whether that is usable is decided by the pipeline layer, which treats it
/// as a failed precondition before any parsing happens.
pub fn load_html(path: &Path) -> Result<String, ScrapeError> {
    fs::read_to_string(path).map_err(|e| ScrapeError::read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_utf8_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html>Список партий</html>").unwrap();

        let html = load_html(&path).unwrap();
        assert_eq!(html, "<html>Список партий</html>");
    }

    #[test]
    fn test_empty_file_reads_as_empty_string() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "").unwrap();

        let html = load_html(&path).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-page.html");

        let err = load_html(&path).unwrap_err();
        assert!(matches!(err, ScrapeError::Read { .. }));
        assert!(err.to_string().contains("no-such-page.html"));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, [0xD0u8, 0x00, 0xFF, 0xFE]).unwrap();

        let err = load_html(&path).unwrap_err();
        assert!(matches!(err, ScrapeError::Read { .. }));
    }
}
