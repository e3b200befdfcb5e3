use crate::error::{AppError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; without either only warnings
/// are shown. Records emitted through the `log` facade are bridged.
///
/// # Errors
///
/// [`AppError::Logging`] when a global subscriber or logger is already set.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
