//! Error types for server address resolution.

use thiserror::Error;

use crate::config::{ConfigError, ResolvedConfig};

/// The server address could not be turned into an IPv4 address.
///
/// The config is handed back unchanged so callers can still inspect its
/// other fields.
#[derive(Debug, Error)]
#[error("failed to resolve 'serverAddr': {addr}")]
pub struct AddrResolveError {
    /// The address as it appeared in the config
    pub addr: String,
    /// The config that was being resolved, with `serverAddr` untouched
    pub config: Box<ResolvedConfig>,
    /// Underlying lookup error
    #[source]
    pub source: std::io::Error,
}

impl AddrResolveError {
    pub(crate) fn new(addr: String, config: ResolvedConfig, source: std::io::Error) -> Self {
        Self {
            addr,
            config: Box::new(config),
            source,
        }
    }

    /// Returns the unresolved config.
    #[must_use]
    pub fn into_config(self) -> ResolvedConfig {
        *self.config
    }
}

/// Error type for the full pipeline: loading followed by address resolution.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Loading the configuration failed; no address lookup was attempted.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configuration loaded but the server address did not resolve.
    #[error(transparent)]
    Resolve(#[from] AddrResolveError),
}
