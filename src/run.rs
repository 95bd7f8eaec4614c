//! Application execution logic.
//!
//! Resolves the server address of a loaded configuration and renders what the
//! entry point prints.

use std::fmt;

use thiserror::Error;

use proxy_conf::config::{ConfigError, DaemonCommand, ResolvedConfig, stringify_proxy_options};
use proxy_conf::resolve::{AddrResolveError, HostResolver, resolve_server_addr};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The server address did not resolve to IPv4.
    #[error(transparent)]
    Resolve(#[from] AddrResolveError),

    /// The resolved options could not be rendered.
    #[error("Failed to render options: {0}")]
    Render(#[from] ConfigError),

    /// The resolved options could not be serialized to JSON.
    #[error("Failed to serialize options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output of a successful run.
#[derive(Debug)]
pub struct Report {
    /// Resolved proxy options as pretty-printed JSON
    pub options_json: String,

    /// Daemon command and the argument line a child process gets
    pub daemon: Option<(DaemonCommand, String)>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.options_json)?;
        if let Some((command, args)) = &self.daemon {
            writeln!(f, "daemon {command}: {args}")?;
        }
        Ok(())
    }
}

/// Resolves the server address and builds the report.
///
/// # Errors
///
/// Returns an error if the server address does not resolve or the options
/// cannot be rendered.
pub async fn execute<R>(config: ResolvedConfig, resolver: &R) -> Result<Report, RunError>
where
    R: HostResolver,
{
    let config = resolve_server_addr(config, resolver).await?;
    tracing::info!(
        server_addr = config.proxy_options.server_addr().unwrap_or_default(),
        "Configuration resolved"
    );

    if config.general_options.pac_update_gfwlist {
        tracing::info!("PAC GFW list update requested");
    }

    let daemon = match config.general_options.daemon {
        Some(command) => Some((command, stringify_proxy_options(&config.proxy_options)?)),
        None => None,
    };

    Ok(Report {
        options_json: serde_json::to_string_pretty(&config.proxy_options)?,
        daemon,
    })
}
