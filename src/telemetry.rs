//! Tracing setup.

use algoviz_core::VisualizerConfig;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The filter to install: `RUST_LOG` if set and valid, else the configured
/// filter, else `info`.
#[must_use]
pub fn env_filter(config: &VisualizerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global `fmt` subscriber filtered by [`env_filter`].
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &VisualizerConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .inspect(|()| tracing::debug!(filter = %config.log_filter, "Tracing initialized"))
}
