//! Logging setup
//!
//! Logs go to stderr so that stdout carries nothing but the JSON result.

use tracing::Level;

/// Install the global subscriber with a maximum level
///
/// Calling it again is a no-op.
pub fn init(level: Level) {
    // Err only means a global subscriber is already installed; the first one stays
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
