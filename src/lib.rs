//! Proxy client configuration.
//!
//! Resolves the effective configuration of a proxy client from built-in
//! defaults, an optional JSON config file and command-line arguments, and
//! normalizes the server address to IPv4.

pub mod config;
pub mod resolve;
