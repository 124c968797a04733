/// Logging setup
///
/// Installs a `tracing` fmt subscriber. `RUST_LOG` overrides the default
/// filter, e.g. `RUST_LOG=plant_identifier=debug`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "plant_identifier=info";

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Err only means a subscriber is already installed
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
