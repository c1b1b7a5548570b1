//! Tracing setup for suite runs.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber for a test process: compact lines routed
/// through the test writer so cargo can capture per-test output, filter
/// taken from `RUST_LOG` when set. Every test may call this; only the
/// first call takes effect.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .compact()
        .try_init();
}
