//! Error handling and scan statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Scan statistics tracking (errors, warnings, info metrics)
//!
//! Error types are categorized into:
//! - **Errors**: failures that terminate a target's classification
//! - **Warnings**: missing optional data that doesn't prevent a verdict
//! - **Info**: notable events (fingerprint matches, skipped assets)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ScanStats;
pub use types::{ErrorType, InfoType, InitializationError, WarningType};
