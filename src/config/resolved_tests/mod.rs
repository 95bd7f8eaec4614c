//! Tests for merged configuration.

use std::path::Path;

use serde_json::json;

use super::ConfigError;
use super::cli::{MappedArgs, map_args_in};
use super::defaults;
use super::file::FileConfig;
use super::resolved::ResolvedConfig;
use super::{DaemonCommand, ProxyOptions, lookup_proxy_option};

/// Helper to map arguments from a slice
fn args(args: &[&str]) -> MappedArgs {
    map_args_in(args, Path::new("/")).unwrap()
}

/// Helper to parse file options
fn file(content: &str) -> ProxyOptions {
    FileConfig::parse(content).unwrap()
}

mod loading_tests;
mod precedence_tests;
