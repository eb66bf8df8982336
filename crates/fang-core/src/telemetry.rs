//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a
/// no-op; returns whether this call installed the subscriber.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
