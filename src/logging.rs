//! Tracing setup
//!
//! Fetch failures are logged as warnings and stale responses at debug; the
//! default filter keeps the console readable while `RUST_LOG` can open the
//! firehose.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Safe to call more than once (tests);
/// later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
