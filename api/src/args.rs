//! Command-line and environment configuration of the HTTP services.

use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;
use netkit_common::config::{
    DEFAULT_BIND, DEFAULT_CONNECT_TIMEOUT, DEFAULT_SCAN_CONCURRENCY, DIAGNOSTICS_API_PORT,
    DiagnosticsConfig, MAX_PING_COUNT, PUBLIC_DNS_SERVER, SUBNET_API_PORT, ScanOptions,
    ServerConfig,
};

#[derive(Debug, Parser)]
#[command(name = "netdiag-api")]
#[command(about = "Network Diagnostics HTTP API")]
#[command(version)]
pub struct DiagnosticsApiArgs {
    #[arg(long, env = "NETDIAG_API_BIND", default_value_t = DEFAULT_BIND)]
    pub bind: IpAddr,

    #[arg(long, env = "NETDIAG_API_PORT", default_value_t = DIAGNOSTICS_API_PORT)]
    pub port: u16,

    /// Server passed to nslookup
    #[arg(long, env = "NETDIAG_DNS_SERVER", default_value_t = PUBLIC_DNS_SERVER)]
    pub dns_server: IpAddr,

    /// Ignore --dns-server and use the host's resolver
    #[arg(long)]
    pub system_resolver: bool,

    /// Largest accepted ping count
    #[arg(long, env = "NETDIAG_MAX_PING_COUNT", default_value_t = MAX_PING_COUNT)]
    pub max_ping_count: u32,

    /// Per-port connect timeout of /scan in milliseconds
    #[arg(long, env = "NETDIAG_SCAN_TIMEOUT_MS", default_value_t = DEFAULT_CONNECT_TIMEOUT.as_millis() as u64)]
    pub scan_timeout_ms: u64,

    /// Connect attempts in flight per /scan request
    #[arg(long, env = "NETDIAG_SCAN_CONCURRENCY", default_value_t = DEFAULT_SCAN_CONCURRENCY)]
    pub scan_concurrency: usize,
}

impl DiagnosticsApiArgs {
    pub fn server(&self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            port: self.port,
        }
    }

    pub fn diagnostics(&self) -> DiagnosticsConfig {
        DiagnosticsConfig {
            dns_server: (!self.system_resolver).then_some(self.dns_server),
            max_ping_count: self.max_ping_count,
        }
    }

    pub fn scan(&self) -> ScanOptions {
        ScanOptions {
            timeout: Duration::from_millis(self.scan_timeout_ms),
            concurrency: self.scan_concurrency,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "subnet-api")]
#[command(about = "Subnet Calculator HTTP API")]
#[command(version)]
pub struct SubnetApiArgs {
    #[arg(long, env = "SUBNET_API_BIND", default_value_t = DEFAULT_BIND)]
    pub bind: IpAddr,

    #[arg(long, env = "SUBNET_API_PORT", default_value_t = SUBNET_API_PORT)]
    pub port: u16,
}

impl SubnetApiArgs {
    pub fn server(&self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            port: self.port,
        }
    }
}
