//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - Certificate verification disabled: recon target lists routinely serve
///   self-signed, expired, or mismatched certificates, and those bodies
///   still need to be read. Deliberate scope decision, not an oversight.
/// - Timeout and User-Agent from the configuration
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// One client serves the whole run, so connections are reused across
/// targets and their assets.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .danger_accept_invalid_certs(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
