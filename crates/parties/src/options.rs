// ABOUTME: Configuration for the party list pipeline.
// ABOUTME: Holds the input/output paths and the base origin used to absolutize links.

use std::path::PathBuf;

/// Default location of the pre-downloaded page.
pub const DEFAULT_INPUT: &str = "page.html";

/// Default location of the JSON output.
pub const DEFAULT_OUTPUT: &str = "parties.json";

/// Origin prepended to site-relative document links. No trailing slash, so
/// joining it with a `/`-prefixed path yields an exact URL.
pub const DEFAULT_BASE_ORIGIN: &str = "https://minjust.gov.ru";

/// Configuration for one scrape run, fixed before the pipeline starts.
#[derive(Debug, Clone)]
pub struct Options {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub base_origin: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
        }
    }
}
