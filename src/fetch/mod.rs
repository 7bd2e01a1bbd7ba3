//! HTTP fetching.
//!
//! Each call performs one GET against the shared client and resolves the
//! response body into text. Response status codes are never treated as
//! errors here — an error page body is fingerprinted like any other body —
//! so a fetch fails only on transport-level problems (timeout, connection,
//! DNS, redirect policy, structural TLS failures).

mod encoding;

use reqwest::Client;

/// The outcome of one HTTP GET: the raw body and its decoded text, computed
/// once at fetch time.
///
/// Owned by the classification that requested it; never shared across
/// targets.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Raw response body bytes.
    pub bytes: Vec<u8>,
    /// Body text after encoding resolution.
    pub text: String,
}

impl FetchResult {
    /// Content length as served: the raw byte count, not the decoded
    /// character count.
    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Fetches a target page.
///
/// The decoded text resolves through the page chain: sniffed encoding, then
/// the `Content-Type` charset, then UTF-8.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchResult, reqwest::Error> {
    let response = client.get(url).send().await?;
    let charset = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(encoding::content_type_charset);
    let bytes = response.bytes().await?;
    let text = encoding::decode_page(&bytes, charset.as_deref());
    Ok(FetchResult {
        bytes: bytes.to_vec(),
        text,
    })
}

/// Fetches a referenced script asset.
///
/// Same transport rules as [`fetch_page`], but the decoded text falls
/// straight back to UTF-8 when sniffing is inconclusive; the transport
/// charset is never consulted for assets.
pub async fn fetch_asset(client: &Client, url: &str) -> Result<FetchResult, reqwest::Error> {
    let response = client.get(url).send().await?;
    let bytes = response.bytes().await?;
    let text = encoding::decode_asset(&bytes);
    Ok(FetchResult {
        bytes: bytes.to_vec(),
        text,
    })
}
