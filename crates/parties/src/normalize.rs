// ABOUTME: Document URL normalization for extracted party links.
// ABOUTME: Produces absolute, query-free https URLs from raw href values.

//! Href normalization.
//!
//! The page links party documents in several historical formats: site-relative
//! paths, protocol-relative references, and absolute http/https URLs, with or
//! without query strings. [`normalize_doc_url`] funnels all of them into one
//! canonical shape: absolute, https, no query.
//!
//! The rules run as a sequence, not as exclusive branches, so a value can pass
//! through more than one of them. A relative path is absolutized first and
//! still has its query stripped afterwards.

/// Normalizes a raw `href` into an absolute, query-free https URL.
///
/// Returns `None` when there is no usable reference: the attribute was absent
/// or its value is empty after trimming. Already-normalized URLs pass through
/// unchanged, so the function is idempotent.
pub fn normalize_doc_url(raw: Option<&str>, base_origin: &str) -> Option<String> {
    let href = raw?.trim();
    if href.is_empty() {
        return None;
    }

    let mut url = href.to_string();

    // Site-relative path. A leading "//" is a protocol-relative reference,
    // handled by the next rule, not a path.
    if url.starts_with('/') && !url.starts_with("//") {
        url.insert_str(0, base_origin);
    }

    if url.starts_with("//") {
        url.insert_str(0, "https:");
    }

    if let Some(rest) = url.strip_prefix("http://") {
        url = format!("https://{rest}");
    }

    // Drop the query string and everything after it.
    if let Some(pos) = url.find('?') {
        url.truncate(pos);
    }

    Some(url)
}
