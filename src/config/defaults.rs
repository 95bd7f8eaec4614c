//! Default values for proxy options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use super::error::field;
use super::options::ProxyOptions;

/// Default server address.
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port.
pub const SERVER_PORT: u16 = 8083;

/// Default local listen address.
pub const LOCAL_ADDR: &str = "127.0.0.1";

/// Default local listen port.
pub const LOCAL_PORT: u16 = 1080;

/// Default PAC file server port.
pub const PAC_SERVER_PORT: u16 = 8090;

/// Placeholder password.
pub const PASSWORD: &str = "YOUR_PASSWORD_HERE";

/// Default cipher.
pub const METHOD: &str = "aes-128-cfb";

/// Default connection timeout in seconds.
pub const TIMEOUT_SECS: u64 = 600;

/// Default log level (`info`).
pub const LEVEL: u8 = 2;

/// Default IPv6 local address.
pub const LOCAL_ADDR_IPV6: &str = "::1";

/// Default IPv6 server address.
pub const SERVER_ADDR_IPV6: &str = "::1";

/// Returns the baseline option set, the lowest-precedence layer.
///
/// A fresh value is built on every call.
#[must_use]
pub fn proxy_options() -> ProxyOptions {
    ProxyOptions::new()
        .with(field::SERVER_ADDR, SERVER_ADDR)
        .with(field::SERVER_PORT, SERVER_PORT)
        .with(field::LOCAL_ADDR, LOCAL_ADDR)
        .with(field::LOCAL_PORT, LOCAL_PORT)
        .with(field::PAC_SERVER_PORT, PAC_SERVER_PORT)
        .with(field::PASSWORD, PASSWORD)
        .with(field::METHOD, METHOD)
        .with(field::TIMEOUT, TIMEOUT_SECS)
        .with(field::LEVEL, LEVEL)
        .with(field::LOCAL_ADDR_IPV6, LOCAL_ADDR_IPV6)
        .with(field::SERVER_ADDR_IPV6, SERVER_ADDR_IPV6)
        .with(field::RECORD_MEMORY_USAGE, false)
}
