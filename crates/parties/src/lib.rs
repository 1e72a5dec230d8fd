// ABOUTME: Main library entry point for the minjust-parties page scraper.
// ABOUTME: Re-exports the public API: Pipeline, Options, PartyRecord, ScrapeError.

//! minjust-parties - extracts the registered political parties list from a
//! saved copy of the Ministry of Justice page and writes it out as JSON.
//!
//! The page is pre-downloaded; this crate only parses it. Extraction walks a
//! fixed structure (`#section-765` block, its text sub-block, one `<ol>`) and
//! aborts with a structural error when any of those landmarks is missing.
//!
//! # Example
//!
//! ```no_run
//! use minjust_parties::{Options, Pipeline, ScrapeError};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let pipeline = Pipeline::new(Options::default());
//!     let records = pipeline.run()?;
//!     println!("{} parties", records.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extract;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod resource;

pub use crate::error::ScrapeError;
pub use crate::extract::extract_parties;
pub use crate::normalize::normalize_doc_url;
pub use crate::options::Options;
pub use crate::pipeline::Pipeline;
pub use crate::record::PartyRecord;
