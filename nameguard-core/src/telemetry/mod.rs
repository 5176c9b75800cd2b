//! Tracing initialization for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from `NAMEGUARD_LOG`
/// (falling back to `warn`). Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("NAMEGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
