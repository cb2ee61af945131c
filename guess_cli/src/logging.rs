//! Tracing subscriber setup.

use std::io;

use crate::config::LogConfig;

/// Install a fmt subscriber writing to stderr, so log lines never mix with
/// the dialogue on stdout.
///
/// Must be called at most once per process.
pub fn init_logger(config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(config.max_level.as_tracing_level())
        .init();
}
