//! Configuration layer.
//!
//! This module provides:
//! - The argument table ([`ARGUMENTS`], [`ArgSpec`])
//! - Command-line mapping ([`map_args`], [`MappedArgs`])
//! - JSON configuration file loading ([`FileConfig`])
//! - Default values ([`defaults`])
//! - Merged configuration ([`ResolvedConfig`])
//! - Serialization back to arguments ([`stringify_proxy_options`])
//!
//! # Priority
//!
//! Proxy options are resolved per key with the following priority (highest to lowest):
//!
//! 1. **Command-line arguments**
//! 2. **JSON config file** (only when `-c`/`--configFilePath` is given)
//! 3. **Built-in defaults**
//!
//! The merge is shallow: a value from a higher layer replaces the lower value
//! whole, including nested objects.
//!
//! # Two Severity Tiers
//!
//! Problems in the arguments themselves (an unknown flag, a daemon command other
//! than `start`/`stop`/`restart`) never fail the pipeline. The first one is kept
//! in [`ResolvedConfig::invalid_option`] and the caller decides what to do.
//! A missing or malformed config file is a [`ConfigError`] and stops resolution.
//!
//! # Flags Without Options
//!
//! `localAddrIPv6`, `serverAddrIPv6` and `_recordMemoryUsage` are legal option
//! names with no public flag (`--mem` is accepted but hidden). The stringifier
//! drops them.

mod cli;
pub mod defaults;
mod error;
mod file;
mod options;
mod path;
mod resolved;
mod stringify;
mod table;

#[cfg(test)]
mod resolved_tests;
#[cfg(test)]
mod stringify_tests;

pub use cli::{
    MappedArgs, PROGRAM_NAME, command, help_text, map_args, map_args_in, utf8_tokens,
};
pub use error::{ConfigError, field, json_type_name};
pub use file::FileConfig;
pub use options::{DaemonCommand, GeneralOptions, InvalidOption, ProxyOptions, value_text};
pub use path::absolutize;
pub use resolved::ResolvedConfig;
pub use stringify::{stringify_proxy_options, stringify_value};
pub use table::{
    ARGUMENTS, ArgKind, ArgSpec, ArgValue, EXTRA_PROXY_KEYS, lookup_long, lookup_proxy_option,
    lookup_short, prefixed,
};
