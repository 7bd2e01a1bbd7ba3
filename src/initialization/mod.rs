//! Initialization of the resources shared across the whole run: the HTTP
//! client, the worker-pool semaphore, and the logger.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

use std::sync::Arc;
use tokio::sync::Semaphore;

/// Creates the semaphore bounding the worker pool.
///
/// Each dispatched target holds one permit for the full length of its
/// classification, including every asset fetch.
pub fn init_semaphore(permits: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(permits))
}
