// ABOUTME: Pipeline orchestration: load, precondition check, extract.
// ABOUTME: Ties the loader and extractor together under one Options value.

use crate::error::ScrapeError;
use crate::extract::extract_parties;
use crate::options::Options;
use crate::record::PartyRecord;
use crate::resource::load_html;

/// The scrape pipeline, configured once and run to completion.
///
/// Data flows one way: input path, HTML text, extracted records. A read
/// failure or an empty input stops the run before any parsing happens;
/// structural failures from extraction pass through untouched.
#[derive(Debug, Clone)]
pub struct Pipeline {
    opts: Options,
}

impl Pipeline {
    /// Creates a pipeline over the given options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// The configured options.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Runs the full pipeline and returns the extracted records in document
    /// order.
    pub fn run(&self) -> Result<Vec<PartyRecord>, ScrapeError> {
        let html = load_html(&self.opts.input_path)?;
        if html.trim().is_empty() {
            return Err(ScrapeError::empty_input(&self.opts.input_path));
        }
        extract_parties(&html, &self.opts.base_origin)
    }
}
