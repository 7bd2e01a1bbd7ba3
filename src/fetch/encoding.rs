//! Byte-level encoding resolution.
//!
//! Recon target lists span hosts serving GBK, Shift_JIS, legacy Latin
//! codepages, and mislabeled UTF-8, so fingerprint matching runs on sniffed
//! text rather than trusting declared charsets. Pages and assets resolve
//! differently: a page falls back to the transport-advertised charset before
//! UTF-8, while an asset falls straight back to UTF-8.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Detects the encoding of `bytes` by content sniffing.
///
/// Returns `None` for empty input, where detection has nothing to work with.
pub(crate) fn detect_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.is_empty() {
        return None;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    Some(detector.guess(None, true))
}

/// Decodes a target page body.
///
/// Resolution order: sniffed encoding, then the `charset` the transport
/// advertised, then UTF-8. Decoding is lossy; undecodable sequences become
/// replacement characters instead of failing the fetch.
pub(crate) fn decode_page(bytes: &[u8], header_charset: Option<&str>) -> String {
    let encoding = detect_encoding(bytes)
        .or_else(|| header_charset.and_then(|label| Encoding::for_label(label.as_bytes())))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Decodes a script asset body.
///
/// Assets never consult the transport charset; inconclusive sniffing falls
/// straight back to UTF-8.
pub(crate) fn decode_asset(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes).unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Extracts the `charset` parameter from a `Content-Type` header value.
pub(crate) fn content_type_charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}
