//! Tracing subscriber setup for the command line tool.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `pgr_progress=debug`.
pub const LOG_ENV: &str = "PGR_PROGRESS_LOG";

/// Filter directive for a `-v` count, falling back to the configured level.
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so machine-readable
/// output on stdout stays clean.
pub fn init(verbose: u8, configured: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}
