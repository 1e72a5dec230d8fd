// ABOUTME: Output side of the pipeline: JSON serialization and console listing.
// ABOUTME: Writes the record list to disk and prints a numbered human-readable report.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ScrapeError;
use crate::record::PartyRecord;

/// Prints a count line and a 1-based numbered listing of the records to
/// stdout. An absent document URL renders as `null`, matching the JSON file.
pub fn print_report(records: &[PartyRecord]) {
    println!("found {} parties", records.len());
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}. {}: {}",
            i + 1,
            record.name,
            record.doc_url.as_deref().unwrap_or("null")
        );
    }
}

/// Serializes the records to pretty JSON and writes them to `path`.
///
/// The file holds an array of `{"name", "doc_url"}` objects with 2-space
/// indentation; non-ASCII text is written literally, not escaped.
pub fn save_json(records: &[PartyRecord], path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| ScrapeError::write(path, io::Error::other(e)))?;
    fs::write(path, json).map_err(|e| ScrapeError::write(path, e))
}
