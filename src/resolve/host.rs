//! Host name lookup.

use std::future::Future;
use std::io;
use std::net::{IpAddr, Ipv4Addr};

/// Trait for looking up the IPv4 address of a host.
///
/// # Design
///
/// This is the only point where the pipeline waits on I/O. Implementations
/// make a single attempt with no timeout or retry; callers wanting either
/// wrap the returned future.
///
/// # Example
///
/// ```ignore
/// use std::net::Ipv4Addr;
/// use proxy_conf::resolve::HostResolver;
///
/// struct FixedResolver(Ipv4Addr);
///
/// impl HostResolver for FixedResolver {
///     async fn lookup_ipv4(&self, _host: &str) -> std::io::Result<Ipv4Addr> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait HostResolver: Send + Sync {
    /// Resolves `host` (a hostname or IPv6 literal) to an IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the lookup fails or yields no IPv4 address.
    fn lookup_ipv4(&self, host: &str) -> impl Future<Output = io::Result<Ipv4Addr>> + Send;
}

/// Production resolver using the system resolver through tokio.
///
/// Returns the first IPv4 address of the lookup result. IPv4-mapped IPv6
/// addresses count as IPv4.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new system resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HostResolver for SystemResolver {
    async fn lookup_ipv4(&self, host: &str) -> io::Result<Ipv4Addr> {
        let mut addrs = tokio::net::lookup_host((host, 0)).await?;

        addrs
            .find_map(|addr| match addr.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(v6) => v6.to_ipv4_mapped(),
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no IPv4 address found for {host}"),
                )
            })
    }
}
