//! Logging utilities
//!
//! Initializes a `tracing` subscriber once per process. The log level is
//! taken from the `LOGLEVEL` environment variable (default `INFO`).

use crate::utils::config::get_env_or_default;
use once_cell::sync::OnceCell;
use tracing::Level;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Sets up the global tracing subscriber
///
/// Safe to call multiple times; only the first call installs the subscriber.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let level: Level = get_env_or_default("LOGLEVEL", Level::INFO);
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    });
}
