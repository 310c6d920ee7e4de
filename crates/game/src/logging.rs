//! Logging initialization for rho binaries.
//!
//! This module provides centralized logging initialization with
//! environment-based filter configuration.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with human-readable output on stdout.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level.
///
/// # Example
/// ```no_run
/// use rho_game::logging;
///
/// logging::init();
/// tracing::info!("engine started");
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Initialize the logging system with all output on stderr.
///
/// Processes that speak the match protocol on stdout must use this
/// variant: a stray log line on stdout would be read as a move.
///
/// # Example
/// ```no_run
/// use rho_game::logging;
///
/// logging::init_stderr();
/// tracing::info!("match starting");
/// ```
pub fn init_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
