//! Logging setup for host applications.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host, which can call [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Default filter when the host passes an empty one.
pub const DEFAULT_FILTER: &str = "rawat_inap_core=info";

/// Install a formatted stderr subscriber with the given `EnvFilter` directive.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(filter: &str) -> bool {
    let filter = if filter.trim().is_empty() {
        EnvFilter::new(DEFAULT_FILTER)
    } else {
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
