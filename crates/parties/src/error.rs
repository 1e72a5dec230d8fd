// ABOUTME: Error types for the party list scraper.
// ABOUTME: Provides ScrapeError with I/O and structural (data-shape) variants.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scraping the party list.
///
/// Two classes: I/O failures around the input and output files, and
/// structural failures where the page no longer contains a landmark the
/// extractor depends on. Structural failures abort the whole run; a partial
/// list extracted from an unexpected layout is worse than no list.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Failed to read the input HTML file (missing, unreadable, or not UTF-8).
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file was readable but held no content to parse.
    #[error("input file {} is empty, nothing to parse", path.display())]
    EmptyInput { path: PathBuf },

    /// An expected landmark is missing from the document.
    #[error("required landmark missing: {0}")]
    StructureNotFound(String),

    /// Failed to write the output JSON file.
    #[error("failed to write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrapeError {
    /// Creates a Read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an EmptyInput error for the given path.
    pub fn empty_input(path: impl Into<PathBuf>) -> Self {
        ScrapeError::EmptyInput { path: path.into() }
    }

    /// Creates a StructureNotFound error naming the missing landmark.
    pub fn structure(landmark: impl Into<String>) -> Self {
        ScrapeError::StructureNotFound(landmark.into())
    }

    /// Creates a Write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a structural (data-shape) error.
    pub fn is_structural(&self) -> bool {
        matches!(self, ScrapeError::StructureNotFound(_))
    }
}
