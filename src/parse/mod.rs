//! HTML parsing and data extraction.
//!
//! This module extracts structured data from HTML content:
//! - The page title (with a sentinel for titleless pages)
//! - Script source URLs resolved against the target URL
//! - The count of scripts referencing an external file
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;

// Re-export public API
pub use html::{count_scripts_with_src, extract_script_sources, extract_title, NO_TITLE};
