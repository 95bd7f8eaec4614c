//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use proxy_conf::config::{ConfigError, ProxyOptions, field};
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid option, missing or malformed config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - server address did not resolve.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileNotFound { .. } => {
            eprintln!("\nPass an existing JSON file with -c, or omit -c to use the defaults.");
        }
        ConfigError::Json(_) | ConfigError::InvalidType { .. } => {
            eprintln!("\nThe config file must contain a single JSON object.");
        }
        _ => {}
    }
}

/// Reads the log level from the `level` option.
///
/// Accepts a number (0 = error through 4 = trace) or a level name. Anything
/// else falls back to `info`.
pub fn log_level(options: &ProxyOptions) -> Level {
    match options.get(field::LEVEL) {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Level::ERROR,
            Some(1) => Level::WARN,
            Some(3) => Level::DEBUG,
            Some(4..) => Level::TRACE,
            _ => Level::INFO,
        },
        Some(Value::String(name)) => name.parse().unwrap_or(Level::INFO),
        _ => Level::INFO,
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
