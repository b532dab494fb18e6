//! Tracing setup
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! wins over the configured filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init(default_filter: &str) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}
