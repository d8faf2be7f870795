//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "autopm_desktop=debug,autopm_desktop_lib=debug";
#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "autopm_desktop=info,autopm_desktop_lib=info";

/// Install the global fmt subscriber. `RUST_LOG` overrides the default filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
