//! Target classification: the two-stage fingerprint pipeline.
//!
//! Each target goes through, strictly in order:
//! 1. Fetch the page (5 s timeout). A failure here ends the target's
//!    classification with no verdict and one counted error.
//! 2. Compute content length, title, and script count unconditionally.
//! 3. HTML fingerprint check on the full response text. A match
//!    short-circuits: no asset is ever fetched.
//! 4. Otherwise fetch each referenced script in document order and run the
//!    JS fingerprint check, stopping at the first match. A failed asset
//!    fetch skips that asset silently; dead third-party script links are
//!    routine, not noteworthy.
//! 5. No match anywhere is a negative classification, not an error.

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::error_handling::{categorize_reqwest_error, InfoType, ScanStats};
use crate::fetch::{fetch_asset, fetch_page};
use crate::fingerprint::FingerprintSet;
use crate::parse::{count_scripts_with_src, extract_script_sources, extract_title};

/// A positive classification record, exported one row per matched target.
///
/// Exists if and only if the HTML or JS fingerprint check returned true for
/// the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The target URL as dispatched.
    pub url: String,
    /// Raw byte length of the page body.
    pub content_length: usize,
    /// Page title, or the sentinel for titleless pages.
    pub title: String,
    /// Number of `<script>` elements with a non-empty `src` attribute.
    pub script_count: usize,
}

/// Shared read-only resources every classification draws on: the HTTP
/// client (connection pool reused across all workers), the immutable
/// fingerprint set, and the scan counters.
pub struct ScanContext {
    /// Shared HTTP client.
    pub client: Arc<Client>,
    /// The fingerprint lists, fixed for the whole run.
    pub fingerprints: FingerprintSet,
    /// Scan-wide error/warning/info counters.
    pub stats: Arc<ScanStats>,
}

impl ScanContext {
    /// Bundles the shared resources for a run.
    pub fn new(client: Arc<Client>, fingerprints: FingerprintSet, stats: Arc<ScanStats>) -> Self {
        ScanContext {
            client,
            fingerprints,
            stats,
        }
    }
}

/// Classifies one target. Never fails: every internal failure becomes a
/// counted, logged non-verdict.
pub async fn classify(ctx: &ScanContext, url: &str) -> Option<Verdict> {
    debug!("Classifying target: {url}");

    let page = match fetch_page(&ctx.client, url).await {
        Ok(page) => page,
        Err(e) => {
            ctx.stats.increment_error(categorize_reqwest_error(&e));
            warn!("Failed to fetch {url}: {e}");
            return None;
        }
    };

    let content_length = page.content_length();

    // scraper::Html is !Send, so all document work happens in this block,
    // before the next await point.
    let (title, script_count, html_match, script_sources) = {
        let document = Html::parse_document(&page.text);
        let title = extract_title(&document, &ctx.stats);
        let script_count = count_scripts_with_src(&document);
        let html_match = ctx.fingerprints.matches_html(&page.text);
        let sources = if html_match {
            Vec::new()
        } else {
            match Url::parse(url) {
                Ok(base) => extract_script_sources(&document, &base),
                Err(e) => {
                    // The fetch already succeeded, so the URL parses for
                    // reqwest; this only guards against semantics drifting
                    // between the two URL implementations.
                    debug!("Could not parse {url} as a base URL: {e}");
                    Vec::new()
                }
            }
        };
        (title, script_count, html_match, sources)
    };

    if html_match {
        ctx.stats.increment_info(InfoType::HtmlFingerprintMatch);
        info!("{url}: Webpack detected via HTML fingerprint");
        return Some(Verdict {
            url: url.to_string(),
            content_length,
            title,
            script_count,
        });
    }

    if any_script_matches(ctx, url, &script_sources).await {
        ctx.stats.increment_info(InfoType::JsFingerprintMatch);
        info!("{url}: Webpack detected via JS fingerprint");
        return Some(Verdict {
            url: url.to_string(),
            content_length,
            title,
            script_count,
        });
    }

    debug!("{url}: no Webpack fingerprints found");
    None
}

/// Fetches each script source in document order and checks its text against
/// the JS fingerprints, stopping at the first match.
///
/// An asset that cannot be fetched is skipped silently (counted, logged at
/// debug only) and never affects sibling assets or the target's outcome.
async fn any_script_matches(ctx: &ScanContext, target: &str, sources: &[String]) -> bool {
    for src in sources {
        let asset = match fetch_asset(&ctx.client, src).await {
            Ok(asset) => asset,
            Err(e) => {
                ctx.stats.increment_info(InfoType::AssetFetchSkipped);
                debug!("{target}: skipping script {src}: {e}");
                continue;
            }
        };
        if ctx.fingerprints.matches_js(&asset.text) {
            debug!("{target}: JS fingerprint in {src}");
            return true;
        }
    }
    false
}
