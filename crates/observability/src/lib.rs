//! `routewarden-observability` — tracing/logging setup for hosts.
//!
//! The guard itself only *emits* events (decisions at `debug`, configuration
//! degradations at `warn`); subscribing to them is the hosting application's
//! call, and this crate is the stock way to make it.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// JSON output, filter from `RUST_LOG` defaulting to `info`. Safe to call
/// multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_default_filter("info");
}

/// Same as [`init`] with a different fallback filter, e.g.
/// `"routewarden_guard=debug"` while diagnosing a misbehaving route table.
pub fn init_with_default_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
