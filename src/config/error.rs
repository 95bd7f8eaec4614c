//! Error types for configuration loading and option serialization.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// These are the fatal failures of the pipeline. Unknown flags and bad daemon
/// commands are not errors at this level; they travel as
/// [`InvalidOption`](super::InvalidOption) data inside the resolved config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file named on the command line does not exist.
    #[error("failed to find config file in: {}", path.display())]
    FileNotFound {
        /// Absolute path that was checked
        path: PathBuf,
    },

    /// The config file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Absolute path of the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A value that must be a JSON object was something else.
    #[error("invalid type of \"{what}\": expected an object, found {found}")]
    InvalidType {
        /// What was being processed
        what: &'static str,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// An option name has no flag in the argument table.
    #[error("invalid optionName: \"{0}\"")]
    InvalidOptionName(String),

    /// The argument parser could not be built or rejected the token stream.
    #[error("Failed to parse arguments: {0}")]
    Arguments(#[from] clap::Error),

    /// The working directory could not be determined.
    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// A command-line argument is not valid UTF-8.
    #[error("argument is not valid UTF-8: {0}")]
    NonUtf8Argument(String),
}

/// Canonical option names.
///
/// Use these constants instead of string literals when reading or writing
/// [`ProxyOptions`](super::ProxyOptions) entries.
pub mod field {
    /// Path of the JSON config file.
    pub const CONFIG_FILE_PATH: &str = "configFilePath";
    /// Upstream server address (IPv4, IPv6 or hostname).
    pub const SERVER_ADDR: &str = "serverAddr";
    /// Upstream server port.
    pub const SERVER_PORT: &str = "serverPort";
    /// PAC file server port.
    pub const PAC_SERVER_PORT: &str = "pacServerPort";
    /// Local listen address.
    pub const LOCAL_ADDR: &str = "localAddr";
    /// Local listen port.
    pub const LOCAL_PORT: &str = "localPort";
    /// Shared secret.
    pub const PASSWORD: &str = "password";
    /// Cipher name.
    pub const METHOD: &str = "method";
    /// Idle timeout in seconds.
    pub const TIMEOUT: &str = "timeout";
    /// Log level.
    pub const LEVEL: &str = "level";
    /// Log file path.
    pub const LOG_PATH: &str = "logPath";
    /// Private switch for memory usage recording.
    pub const RECORD_MEMORY_USAGE: &str = "_recordMemoryUsage";
    /// Derived IPv6 local address.
    pub const LOCAL_ADDR_IPV6: &str = "localAddrIPv6";
    /// Derived IPv6 server address.
    pub const SERVER_ADDR_IPV6: &str = "serverAddrIPv6";
}

/// Returns the JSON type name of a value, for error messages.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
