//! Error categorization.
//!
//! This module maps transport errors onto the counter categories tracked by
//! [`ScanStats`](super::stats::ScanStats).

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// The fetch layer never calls `error_for_status`, so the error carries no
/// HTTP status; categorization runs purely on the transport-level predicates.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

// Building reqwest::Error values by hand requires a live transport failure,
// so categorization is exercised through the classifier tests in
// src/classify/mod.rs, which drive real timeouts and refused connections
// against local sockets.
