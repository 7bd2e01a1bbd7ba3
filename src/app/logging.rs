//! Progress logging utilities.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::info;

/// Logs one progress line: targets finished, match count, and throughput.
///
/// Called on an interval while the pool drains and once more after the last
/// worker finishes.
pub fn log_progress(
    start_time: std::time::Instant,
    completed_targets: &Arc<AtomicUsize>,
    matched_targets: &Arc<AtomicUsize>,
    total_targets: usize,
) {
    let completed = completed_targets.load(Ordering::SeqCst);
    let matched = matched_targets.load(Ordering::SeqCst);
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Scanned {}/{} targets in {:.2} seconds (~{:.2} targets/sec), {} Webpack match{}",
        completed,
        total_targets,
        elapsed_secs,
        rate,
        matched,
        if matched == 1 { "" } else { "es" }
    );
}
