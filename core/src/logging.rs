//! Logging init: fmt subscriber on stderr, filtered by `RUST_LOG`.
//!
//! Stdout is left for command output so the resolved URL can be piped.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,endpoint_core=debug";

/// Install the global subscriber. Returns an error if one is already set.
pub fn init_logging() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish()
        .try_init()
}

/// Same as [`init_logging`] but writes through the test harness so output
/// shows up only for failing tests. Safe to call more than once.
pub fn init_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .finish()
        .try_init();
}
