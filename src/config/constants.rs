//! Configuration constants.
//!
//! This module defines the operational defaults: pool size, timeout, file
//! names, and the request User-Agent.

/// Maximum concurrent targets (worker pool size).
///
/// 30 balances throughput against the surveyed hosts' tolerance for parallel
/// connections; oversubscribing tends to end large runs with hung
/// connections instead of a clean drain.
pub const MAX_WORKERS: usize = 30;

/// Per-request timeout in seconds. Applies to page and asset fetches alike.
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// Default input file of newline-delimited target URLs.
pub const DEFAULT_TARGETS_FILE: &str = "targets.txt";

/// Default CSV path positive verdicts are exported to.
pub const DEFAULT_OUTPUT_FILE: &str = "results.csv";

/// Seconds between progress log lines while the pool drains.
pub const LOGGING_INTERVAL_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
