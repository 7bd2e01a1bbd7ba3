//! Configuration types and CLI options.
//!
//! This module defines the clap-derived configuration struct and the enums
//! used for command-line argument parsing. Every flag carries a default, so
//! a bare invocation needs nothing beyond the input file's presence.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_OUTPUT_FILE, DEFAULT_TARGETS_FILE, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS, MAX_WORKERS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scan configuration, parsed from the command line or constructed
/// programmatically.
///
/// # Examples
///
/// ```no_run
/// use webpack_scan::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("targets.txt"),
///     max_concurrency: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "webpack_scan",
    about = "Probes a list of URLs and fingerprints sites built with the Webpack bundler",
    version
)]
pub struct Config {
    /// File to read target URLs from, one per line
    #[arg(default_value = DEFAULT_TARGETS_FILE)]
    pub file: PathBuf,

    /// CSV file positive verdicts are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Maximum concurrent targets (worker pool size)
    #[arg(long, default_value_t = MAX_WORKERS)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_TARGETS_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            max_concurrency: MAX_WORKERS,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
