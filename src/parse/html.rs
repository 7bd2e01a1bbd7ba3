//! HTML extraction utilities.
//!
//! This module extracts the data points a verdict carries:
//! - Page title
//! - Script `src` enumeration, resolved against the target URL
//! - Script-with-source count
//!
//! All parsing is done with CSS selectors via the `scraper` crate, which
//! recovers from malformed or partial markup instead of failing.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::error_handling::{ScanStats, WarningType};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const SCRIPT_SRC_SELECTOR_STR: &str = "script[src]";

/// Sentinel title recorded when a page has no `<title>` element.
pub const NO_TITLE: &str = "No Title";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(TITLE_SELECTOR_STR));

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(SCRIPT_SRC_SELECTOR_STR));

/// Parses a compile-time constant selector string.
///
/// A parse failure means the constant itself is wrong; log it and fall back
/// to a known-valid selector that matches nothing so a scan keeps running.
fn parse_static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{selector_str}': {e}");
        Selector::parse("*:not(*)")
            .unwrap_or_else(|_| panic!("fallback selector '*:not(*)' must parse"))
    })
}

/// Extracts the page title from an HTML document.
///
/// Returns the trimmed text of the first `<title>` element. When the document
/// has no title element at all, records a [`WarningType::MissingTitle`] and
/// returns the [`NO_TITLE`] sentinel; a present-but-empty title yields the
/// empty string.
pub fn extract_title(document: &Html, stats: &ScanStats) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => {
            stats.increment_warning(WarningType::MissingTitle);
            NO_TITLE.to_string()
        }
    }
}

/// Enumerates script source URLs, resolved against `base`.
///
/// Walks `<script>` elements in document order; each non-empty `src` value is
/// joined against `base` with standard URL semantics (relative paths resolve
/// against the base path, absolute URLs pass through, scheme-relative URLs
/// inherit the base scheme). When a join fails the raw attribute value is
/// kept, so the result always has one entry per script with a source.
pub fn extract_script_sources(document: &Html, base: &Url) -> Vec<String> {
    document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(|src| match base.join(src) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                log::debug!("Could not resolve script src '{src}' against {base}: {e}");
                src.to_string()
            }
        })
        .collect()
}

/// Counts `<script>` elements carrying a non-empty `src` attribute.
///
/// Uses the same predicate as [`extract_script_sources`], so for any document
/// the count equals the length of the extracted source list.
pub fn count_scripts_with_src(document: &Html) -> usize {
    document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .filter(|src| !src.is_empty())
        .count()
}
