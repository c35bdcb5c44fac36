//! Link extraction from raw page text.
//!
//! A page is scanned for URL-like tokens with a fixed pattern (optional
//! scheme, then path/query characters around a dot). No HTML parsing: the
//! same scan works on HTML, directory listings, and plain-text indexes.
//! Duplicates are kept; position is identity downstream.

mod resolve;

pub use resolve::resolve_url;

use regex::Regex;
use std::sync::OnceLock;

const URL_TOKEN_PATTERN: &str = r"(?:(?:https?|ftp)://)?[\w/\-?=%.]+\.[\w/\-&?=%.]+";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_TOKEN_PATTERN).unwrap())
}

/// Ordered scan of URL-like tokens in `text`. Malformed tokens pass
/// through; the probe stage weeds them out.
pub fn extract_urls(text: &str) -> Vec<String> {
    token_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts tokens and resolves each against the page URL they came from.
pub fn extract_and_resolve(base: &str, text: &str) -> Vec<String> {
    extract_urls(text)
        .iter()
        .map(|token| resolve_url(base, token))
        .collect()
}
