//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: service crates at `info`, HTTP
/// request spans from `tower_http` at `debug`.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
