//! Tracing subscriber setup for the command-line tool

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::io::error::{Result, logging_error};
use tracing_subscriber::EnvFilter;

/// Pick the log filter, letting `RUST_LOG` override the defaults
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_LOG_FILTER)
        } else {
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }
    })
}

/// Install a stderr `fmt` subscriber as the global default
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_tracing(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| logging_error(&err))
}
