//! Server address resolution.
//!
//! The transport only opens sockets to IPv4 literals, so a `serverAddr` given
//! as a hostname or IPv6 literal is looked up once and replaced by an IPv4
//! address before the config is handed on.
//!
//! This module provides:
//! - The lookup abstraction ([`HostResolver`])
//! - The production resolver ([`SystemResolver`])
//! - The resolution step ([`resolve_server_addr`]) and the full pipeline
//!   ([`load_config`])

mod error;
mod host;
mod server;


pub use error::{AddrResolveError, LoadError};
pub use host::{HostResolver, SystemResolver};
pub use server::{load_config, load_config_in, resolve_server_addr};
