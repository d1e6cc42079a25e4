// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Logging setup

use crate::config::LogLevel;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Installs a stderr subscriber filtered at `level`
///
/// `RUST_LOG`, when set and valid, takes precedence over `level`. Returns
/// `false` if a global subscriber was already installed, in which case the
/// call has no effect.
pub fn init(level: LogLevel) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let stderr_logger = fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let installed = tracing_subscriber::registry()
        .with(stderr_logger)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init(LogLevel::Debug);
        assert!(!init(LogLevel::Info));
    }
}
