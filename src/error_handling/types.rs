//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the
//! application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Types of errors that can occur while fetching a target page.
///
/// These categorize actual failures — conditions that terminate a target's
/// classification. Response status codes are deliberately absent: a 404 or 500
/// body is still fingerprinted like any other, so status never becomes an
/// error here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The request could not be constructed (malformed target URL).
    HttpRequestBuilderError,
    /// The redirect policy was exhausted or a redirect loop was detected.
    HttpRequestRedirectError,
    /// The request exceeded the per-request timeout.
    HttpRequestTimeoutError,
    /// The request failed while being sent.
    HttpRequestRequestError,
    /// The connection could not be established (refused, DNS, TLS handshake).
    HttpRequestConnectError,
    /// The response body could not be read.
    HttpRequestBodyError,
    /// The response body could not be decoded in transit.
    HttpRequestDecodeError,
    /// Any other request failure.
    HttpRequestOtherError,
}

/// Types of warnings that can occur during classification.
///
/// Warnings indicate missing optional data that doesn't prevent a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// The page has no `<title>` element; the sentinel title is used instead.
    MissingTitle,
}

/// Types of informational metrics tracked during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A target matched at the HTML stage.
    HtmlFingerprintMatch,
    /// A target matched at the JS stage.
    JsFingerprintMatch,
    /// A referenced script could not be fetched and was skipped.
    AssetFetchSkipped,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HtmlFingerprintMatch => "Webpack detected via HTML fingerprint",
            InfoType::JsFingerprintMatch => "Webpack detected via JS fingerprint",
            InfoType::AssetFetchSkipped => "Script asset fetch skipped",
        }
    }
}
