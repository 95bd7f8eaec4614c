//! Resolution of the `serverAddr` option.

use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::config::{ConfigError, ResolvedConfig, field, value_text};

use super::{AddrResolveError, HostResolver, LoadError};

/// Dotted-quad text. Octets are not range checked and may carry leading
/// zeros, so `010.0.0.1` is kept as written instead of being handed to the
/// system resolver, which may read it as octal.
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("valid dotted-quad regex")
});

/// Replaces a hostname or IPv6 `serverAddr` with its IPv4 address.
///
/// An address already written as a dotted quad is returned as is, without
/// calling the resolver. Otherwise exactly one lookup is made.
///
/// # Errors
///
/// Returns [`AddrResolveError`] if `serverAddr` is missing, not a string, or
/// does not resolve to an IPv4 address. The error carries the original
/// config.
pub async fn resolve_server_addr<R>(
    config: ResolvedConfig,
    resolver: &R,
) -> Result<ResolvedConfig, AddrResolveError>
where
    R: HostResolver,
{
    let addr = match config.proxy_options.get(field::SERVER_ADDR) {
        Some(Value::String(addr)) => addr.clone(),
        other => {
            let addr = other.and_then(value_text).unwrap_or_default();
            let source = io::Error::new(io::ErrorKind::InvalidInput, "serverAddr is not a string");
            return Err(AddrResolveError::new(addr, config, source));
        }
    };

    if DOTTED_QUAD.is_match(&addr) {
        return Ok(config);
    }

    tracing::debug!(addr = %addr, "Resolving server address");
    match resolver.lookup_ipv4(&addr).await {
        Ok(ip) => {
            tracing::debug!(addr = %addr, %ip, "Resolved server address");
            let mut config = config;
            config.proxy_options.insert(field::SERVER_ADDR, ip.to_string());
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(addr = %addr, error = %e, "Failed to resolve server address");
            Err(AddrResolveError::new(addr, config, e))
        }
    }
}

/// Runs the whole pipeline: map arguments, merge defaults, config file and
/// arguments, then resolve the server address.
///
/// # Errors
///
/// Returns [`LoadError::Config`] if loading fails (no lookup is attempted)
/// and [`LoadError::Resolve`] if the server address does not resolve.
pub async fn load_config<I, T, R>(tokens: I, resolver: &R) -> Result<ResolvedConfig, LoadError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    R: HostResolver,
{
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    load_config_in(tokens, &cwd, resolver).await
}

/// Same as [`load_config`] with an explicit working directory.
///
/// # Errors
///
/// See [`load_config`].
pub async fn load_config_in<I, T, R>(
    tokens: I,
    cwd: &Path,
    resolver: &R,
) -> Result<ResolvedConfig, LoadError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
    R: HostResolver,
{
    let config = ResolvedConfig::load_in(tokens, cwd)?;
    Ok(resolve_server_addr(config, resolver).await?)
}
