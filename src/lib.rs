//! webpack_scan library: batch Webpack fingerprinting of target URLs.
//!
//! This library probes a list of URLs concurrently and classifies each one
//! as Webpack-built or not, using a two-stage check: literal fingerprints in
//! the served HTML first, then in the referenced JavaScript assets when the
//! HTML stage is negative. Positive verdicts are exported as a CSV table.
//!
//! # Example
//!
//! ```no_run
//! use webpack_scan::{Config, run_scan};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("targets.txt"),
//!     max_concurrency: 30,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Scanned {} targets: {} matched, {} failed",
//!          report.total_targets, report.verdicts.len(), report.failed_targets);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from within an async context.

#![warn(missing_docs)]

mod app;
pub mod classify;
pub mod config;
pub mod error_handling;
pub mod export;
mod fetch;
pub mod fingerprint;
pub mod initialization;
mod parse;

// Re-export public API
pub use classify::{ScanContext, Verdict};
pub use config::{Config, LogFormat, LogLevel};
pub use fingerprint::FingerprintSet;
pub use run::{run_scan, ScanReport};

// Internal run module (contains the scan coordinator)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_scan_statistics};
    use crate::classify::{classify, ScanContext, Verdict};
    use crate::config::{Config, LOGGING_INTERVAL_SECS};
    use crate::error_handling::ScanStats;
    use crate::export::write_verdicts;
    use crate::fingerprint::FingerprintSet;
    use crate::initialization::{init_client, init_semaphore};

    /// Results of a completed scan.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Number of targets dispatched (one per non-blank input line).
        pub total_targets: usize,
        /// Number of targets whose page fetch failed.
        pub failed_targets: usize,
        /// Positive verdicts, in completion order.
        pub verdicts: Vec<Verdict>,
        /// Whether the verdict table was written (false when no target
        /// matched).
        pub exported: bool,
        /// Path the verdict table is written to when `exported` is true.
        pub output_path: std::path::PathBuf,
        /// Elapsed wall-clock time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a scan with the provided configuration.
    ///
    /// Reads newline-delimited target URLs from the input file, classifies
    /// them concurrently under a bounded worker pool, and exports positive
    /// verdicts as CSV. Individual target failures are counted and logged
    /// but never abort the run; the only hard errors are a missing input
    /// file and an unwritable output file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened or read
    /// - The HTTP client cannot be initialized
    /// - The verdict table cannot be written
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let file = tokio::fs::File::open(&config.file)
            .await
            .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
        let mut lines = BufReader::new(file).lines();

        let semaphore = init_semaphore(config.max_concurrency);
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let stats = Arc::new(ScanStats::new());
        let ctx = Arc::new(ScanContext::new(
            client,
            FingerprintSet::webpack(),
            Arc::clone(&stats),
        ));

        info!(
            "Starting scan from {} ({} workers, {}s timeout)",
            config.file.display(),
            config.max_concurrency,
            config.timeout_seconds
        );

        let start_time = std::time::Instant::now();
        let completed_targets = Arc::new(AtomicUsize::new(0));
        let matched_targets = Arc::new(AtomicUsize::new(0));
        let mut dispatched = 0usize;

        let mut tasks = FuturesUnordered::new();

        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read line from input file")?
        {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let url = trimmed.to_string();

            // Holding the permit across dispatch bounds the pool: this loop
            // stalls once max_concurrency classifications are in flight.
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping target: {url}");
                    continue;
                }
            };

            dispatched += 1;

            let ctx = Arc::clone(&ctx);
            let completed = Arc::clone(&completed_targets);
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let verdict = classify(&ctx, &url).await;
                completed.fetch_add(1, Ordering::SeqCst);
                verdict
            }));
        }

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();

        let completed_for_logging = Arc::clone(&completed_targets);
        let matched_for_logging = Arc::clone(&matched_targets);
        let total_for_logging = dispatched;
        let logging_task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL_SECS));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(
                            start_time,
                            &completed_for_logging,
                            &matched_for_logging,
                            total_for_logging,
                        );
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        });

        // Single-writer accumulation: workers hand verdicts back through
        // their join handles and only this loop appends, in completion
        // order.
        let mut verdicts: Vec<Verdict> = Vec::new();
        while let Some(task_result) = tasks.next().await {
            match task_result {
                Ok(Some(verdict)) => {
                    matched_targets.fetch_add(1, Ordering::SeqCst);
                    verdicts.push(verdict);
                }
                Ok(None) => {}
                Err(join_error) => {
                    warn!("Worker task panicked: {join_error:?}");
                }
            }
        }

        cancel.cancel();
        if let Err(e) = logging_task.await {
            warn!("Progress logging task failed to shut down: {e:?}");
        }

        log_progress(start_time, &completed_targets, &matched_targets, dispatched);
        print_scan_statistics(&stats);

        let exported = if verdicts.is_empty() {
            info!("No Webpack matches found, skipping export");
            false
        } else {
            let written = write_verdicts(&config.output, &verdicts)
                .context("Failed to write verdict table")?;
            info!(
                "Exported {} verdict{} to {}",
                written,
                if written == 1 { "" } else { "s" },
                config.output.display()
            );
            true
        };

        Ok(ScanReport {
            total_targets: dispatched,
            failed_targets: stats.total_errors(),
            verdicts,
            exported,
            output_path: config.output,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
