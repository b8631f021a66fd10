use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PING_COUNT: u32 = 4;
/// Upper bound on echo requests per ping run.
pub const MAX_PING_COUNT: u32 = 100;

/// Resolver pinned by the HTTP diagnostics service.
pub const PUBLIC_DNS_SERVER: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

pub const DEFAULT_SCAN_START: u16 = 1;
pub const DEFAULT_SCAN_END: u16 = 1024;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(500);
pub const DEFAULT_SCAN_CONCURRENCY: usize = 128;

pub const DIAGNOSTICS_API_PORT: u16 = 5001;
pub const SUBNET_API_PORT: u16 = 5000;
pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Server handed to `nslookup`.
    ///
    /// `None` leaves the choice to the system resolver.
    pub dns_server: Option<IpAddr>,
    /// Largest `count` accepted by ping.
    pub max_ping_count: u32,
}

impl DiagnosticsConfig {
    pub fn system_resolver() -> Self {
        Self {
            dns_server: None,
            max_ping_count: MAX_PING_COUNT,
        }
    }

    pub fn public_resolver() -> Self {
        Self {
            dns_server: Some(PUBLIC_DNS_SERVER),
            max_ping_count: MAX_PING_COUNT,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self::system_resolver()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// How long a single connect attempt may take before the port counts as closed.
    pub timeout: Duration,
    /// Connect attempts allowed in flight at once.
    pub concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_CONNECT_TIMEOUT,
            concurrency: DEFAULT_SCAN_CONCURRENCY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
