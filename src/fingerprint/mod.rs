//! Webpack fingerprint definitions and matching.
//!
//! Detection is deliberately literal: a page or script is flagged when its
//! text contains any of a fixed set of substrings. No regexes, no fuzzy
//! matching — the checks stay cheap, deterministic, and easy to audit.

/// Substrings whose presence in served HTML marks a Webpack-bundled site.
///
/// The list mixes direct Webpack runtime artifacts (`webpackJsonp`,
/// `__webpack_require__`) with markers of frameworks that ship Webpack output
/// (Next.js, Gatsby) and common bundle naming conventions.
const HTML_FINGERPRINTS: &[&str] = &[
    "<noscript",
    "webpackJsonp",
    "__webpack_require__",
    "webpack-",
    "<script id=\"__NEXT_DATA__",
    "<style id=\"gatsby-inlined-css",
    "<div id=\"___gatsby",
    "chunk",
    "runtime",
    "app.bundle",
    "manifest",
];

/// Substrings whose presence in a referenced JavaScript file marks Webpack.
const JS_FINGERPRINTS: &[&str] = &["webpackJsonp", "__webpack_require__", "webpackChunk"];

/// Immutable pair of fingerprint lists, one for HTML-level detection and one
/// for JS-level detection.
///
/// Constructed once at process start and shared read-only across all workers.
#[derive(Debug, Clone)]
pub struct FingerprintSet {
    html: &'static [&'static str],
    js: &'static [&'static str],
}

impl FingerprintSet {
    /// Returns the built-in Webpack fingerprint set.
    pub fn webpack() -> Self {
        FingerprintSet {
            html: HTML_FINGERPRINTS,
            js: JS_FINGERPRINTS,
        }
    }

    /// Returns true iff any HTML fingerprint appears literally
    /// (case-sensitive) in `text`. Empty text never matches.
    pub fn matches_html(&self, text: &str) -> bool {
        self.html.iter().any(|fingerprint| text.contains(fingerprint))
    }

    /// Returns true iff any JS fingerprint appears literally (case-sensitive)
    /// in `text`. Empty text never matches.
    pub fn matches_js(&self, text: &str) -> bool {
        self.js.iter().any(|fingerprint| text.contains(fingerprint))
    }

    /// The configured HTML fingerprints.
    pub fn html_fingerprints(&self) -> &[&'static str] {
        self.html
    }

    /// The configured JS fingerprints.
    pub fn js_fingerprints(&self) -> &[&'static str] {
        self.js
    }
}

impl Default for FingerprintSet {
    fn default() -> Self {
        Self::webpack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_html_fingerprint_matches() {
        let set = FingerprintSet::webpack();
        for fingerprint in set.html_fingerprints() {
            let text = format!("<html><body>{fingerprint}</body></html>");
            assert!(
                set.matches_html(&text),
                "HTML fingerprint {fingerprint:?} should match"
            );
        }
    }

    #[test]
    fn test_every_js_fingerprint_matches() {
        let set = FingerprintSet::webpack();
        for fingerprint in set.js_fingerprints() {
            let text = format!("!function(){{ {fingerprint} }}();");
            assert!(
                set.matches_js(&text),
                "JS fingerprint {fingerprint:?} should match"
            );
        }
    }

    #[test]
    fn test_html_without_fingerprints_is_negative() {
        let set = FingerprintSet::webpack();
        let text = "<html><head><title>Plain</title></head><body><p>hello</p></body></html>";
        assert!(!set.matches_html(text));
    }

    #[test]
    fn test_js_without_fingerprints_is_negative() {
        let set = FingerprintSet::webpack();
        assert!(!set.matches_js("console.log('hello');"));
        // An HTML-only fingerprint must not leak into the JS check
        assert!(!set.matches_js("var s = '<noscript>';"));
    }

    #[test]
    fn test_empty_text_is_negative() {
        let set = FingerprintSet::webpack();
        assert!(!set.matches_html(""));
        assert!(!set.matches_js(""));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let set = FingerprintSet::webpack();
        assert!(!set.matches_js("WEBPACKJSONP"));
        assert!(set.matches_js("webpackJsonp"));
    }

    #[test]
    fn test_fingerprint_in_larger_text_matches() {
        let set = FingerprintSet::webpack();
        let page = r#"<script>window.webpackJsonp = window.webpackJsonp || [];</script>"#;
        assert!(set.matches_html(page));
    }
}
