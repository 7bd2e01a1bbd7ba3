//! Progress and statistics reporting for the running scan.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_scan_statistics;
