// ABOUTME: Extraction of party entries from the registered-parties block.
// ABOUTME: Walks the fixed #section-765 structure and fails loudly when it changes.

//! Party list extraction.
//!
//! The saved page carries one registered-parties block with a stable id:
//!
//! ```html
//! <div class="page-block" id="section-765">
//!     <h3>...</h3>
//!     <div class="page-block-text">
//!         <ol>
//!             <li><a href="/ru/documents/7767/">Party name</a></li>
//!             ...
//!         </ol>
//!     </div>
//! </div>
//! ```
//!
//! Extraction descends through that structure with required lookups: the
//! block, its text sub-block, and the ordered list each turn into a
//! [`ScrapeError::StructureNotFound`] when absent. A changed layout aborts
//! the run instead of producing an empty or partial list.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::normalize::normalize_doc_url;
use crate::record::PartyRecord;

/// Selector and diagnostic label for the registered-parties block.
const PARTY_BLOCK: (&str, &str) = ("div#section-765", "party list block div#section-765");

/// Selector and diagnostic label for the text sub-block inside it.
const TEXT_BLOCK: (&str, &str) = (
    "div.page-block-text",
    "text block div.page-block-text inside div#section-765",
);

/// Selector and diagnostic label for the ordered list of parties.
const PARTY_LIST: (&str, &str) = ("ol", "party list <ol> inside div#section-765");

/// Extracts all party records from the raw page HTML, in document order.
///
/// Items whose name trims to nothing are dropped. Raw hrefs are normalized
/// against `base_origin`; see [`normalize_doc_url`]. An item without a link
/// contributes its full visible text as the name and no URL.
pub fn extract_parties(html: &str, base_origin: &str) -> Result<Vec<PartyRecord>, ScrapeError> {
    let doc = Html::parse_document(html);

    let block = select_required(doc.root_element(), PARTY_BLOCK)?;
    let text_block = select_required(block, TEXT_BLOCK)?;
    let list = select_required(text_block, PARTY_LIST)?;

    let item_sel = selector("li")?;
    let anchor_sel = selector("a")?;

    let mut parties = Vec::new();
    for item in list.select(&item_sel) {
        let (name, raw_href) = match item.select(&anchor_sel).next() {
            // The anchor text is the party name; the href may still be absent.
            Some(anchor) => (element_text(anchor), anchor.value().attr("href")),
            None => (element_text(item), None),
        };

        if name.is_empty() {
            continue;
        }

        parties.push(PartyRecord {
            name,
            doc_url: normalize_doc_url(raw_href, base_origin),
        });
    }

    Ok(parties)
}

/// Finds the first descendant of `scope` matching the selector, or fails with
/// a structural error naming the missing landmark.
fn select_required<'a>(
    scope: ElementRef<'a>,
    (css, landmark): (&str, &str),
) -> Result<ElementRef<'a>, ScrapeError> {
    let sel = selector(css)?;
    scope
        .select(&sel)
        .next()
        .ok_or_else(|| ScrapeError::structure(landmark))
}

/// Compiles a CSS selector. The selectors here are fixed strings, so a parse
/// failure is itself a landmark that cannot be looked for.
fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::structure(css))
}

/// Visible text of an element and its descendants, trimmed at both ends.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
