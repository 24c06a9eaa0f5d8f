//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::types::LogLevel;

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// `PAGEAUDIT_LOG` takes precedence over `level` and accepts per-crate
/// directives, e.g. `PAGEAUDIT_LOG=pageaudit_engine=debug,warn`.
/// Stdout is left to command output.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PAGEAUDIT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
