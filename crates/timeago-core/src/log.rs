//! Logging setup.
//!
//! The library only emits `tracing` events: tier selection at `trace`,
//! settings changes and parse failures at `debug`. Applications that do not
//! install their own subscriber can use [`init_default`].

use timeago_types::{Result, TimeagoError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVES: &str = "timeago_core=info";

/// Initialize logging with [`DEFAULT_DIRECTIVES`], honouring `RUST_LOG`.
pub fn init_default() -> Result<()> {
    init(DEFAULT_DIRECTIVES)
}

/// Initialize logging with the given filter directives (e.g.
/// `"timeago_core=trace"`). `RUST_LOG` takes precedence when set.
///
/// # Errors
///
/// Returns [`TimeagoError::Config`] for invalid directives or when a global
/// subscriber is already installed.
pub fn init(directives: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives)
            .map_err(|e| TimeagoError::Config(format!("Invalid log directives '{}': {}", directives, e)))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| TimeagoError::Config(format!("Failed to initialize logging: {}", e)))
}
