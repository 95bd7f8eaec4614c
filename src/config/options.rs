//! Option bags produced by the pipeline.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ConfigError, field, json_type_name};

/// Proxy settings keyed by canonical option name.
///
/// Keys keep insertion order. Values are untyped JSON because the config file
/// may carry any shape; typed accessors cover the well-known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxyOptions(Map<String, Value>);

impl ProxyOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value under `key` if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the value under `key` if it is a non-negative integer.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// Stores `value` under `key`, keeping the key's original position if it
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Shallow merge: every entry of `other` replaces the entry with the same key.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Upstream server address.
    #[must_use]
    pub fn server_addr(&self) -> Option<&str> {
        self.get_str(field::SERVER_ADDR)
    }

    /// Upstream server port.
    #[must_use]
    pub fn server_port(&self) -> Option<u64> {
        self.get_u64(field::SERVER_PORT)
    }

    /// Local listen port.
    #[must_use]
    pub fn local_port(&self) -> Option<u64> {
        self.get_u64(field::LOCAL_PORT)
    }

    /// Config file path given on the command line.
    #[must_use]
    pub fn config_file_path(&self) -> Option<String> {
        self.get(field::CONFIG_FILE_PATH).and_then(value_text)
    }

    /// Log file path.
    #[must_use]
    pub fn log_path(&self) -> Option<&str> {
        self.get_str(field::LOG_PATH)
    }
}

impl From<Map<String, Value>> for ProxyOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ProxyOptions {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ConfigError::InvalidType {
                what: "proxyOptions",
                found: json_type_name(&other),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ProxyOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Renders a scalar option value as plain text: strings without quotes,
/// numbers and booleans in their JSON form. Null has no text form.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Lifecycle action for the background process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DaemonCommand {
    /// Start the daemon
    Start,
    /// Stop the daemon
    Stop,
    /// Stop, then start the daemon
    Restart,
}

impl DaemonCommand {
    /// Parses the exact lowercase command name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, false).ok()
    }

    /// Lowercase command name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for DaemonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the invocation itself rather than the proxy connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralOptions {
    /// `-h` / `--help` was given
    pub help: bool,

    /// Daemon lifecycle command, if a valid one was given
    pub daemon: Option<DaemonCommand>,

    /// `--pac_update_gfwlist` was given
    pub pac_update_gfwlist: bool,
}

/// Soft diagnostic recorded by the argument mapper.
///
/// Carried as data in the resolved config; callers decide whether to abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidOption {
    /// A flag that is not in the argument table, stored without dashes.
    UnknownFlag(String),
    /// A daemon command outside start/stop/restart.
    InvalidDaemonCommand(String),
}

impl fmt::Display for InvalidOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(name) => f.write_str(&super::table::prefixed(name)),
            Self::InvalidDaemonCommand(value) => write!(f, "invalid daemon command: {value}"),
        }
    }
}
