//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `webpack_scan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use webpack_scan::initialization::init_logger_with;
use webpack_scan::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the scan using the library
    match run_scan(config).await {
        Ok(report) => {
            // Print user-friendly summary
            let matched = report.verdicts.len();
            if report.exported {
                println!(
                    "✅ Scanned {} target{} in {:.1}s: {} Webpack match{}, {} failed. Results in {}",
                    report.total_targets,
                    if report.total_targets == 1 { "" } else { "s" },
                    report.elapsed_seconds,
                    matched,
                    if matched == 1 { "" } else { "es" },
                    report.failed_targets,
                    report.output_path.display()
                );
            } else {
                println!(
                    "Scanned {} target{} in {:.1}s: no Webpack matches found ({} failed)",
                    report.total_targets,
                    if report.total_targets == 1 { "" } else { "s" },
                    report.elapsed_seconds,
                    report.failed_targets
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("webpack_scan error: {:#}", e);
            process::exit(1);
        }
    }
}
