//! Tracing setup for `combat-plan`.
//!
//! Pipeline stages log at debug, finished plans at info. Everything goes to
//! stderr so that JSON and CSV on stdout stay parseable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the subscriber at WARN, so a plain run only prints the plan.
pub fn init() {
    init_with_level("warn")
}

/// Install the subscriber at `default_level` (`--verbose` passes "debug").
///
/// RUST_LOG, when set, replaces the level entirely.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug output through the test harness; safe to call from many tests
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
