pub mod diagnose;
pub mod scan;
pub mod subnet;

use std::net::IpAddr;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use netkit_common::config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_PING_COUNT, DEFAULT_SCAN_CONCURRENCY, DEFAULT_SCAN_END,
    DEFAULT_SCAN_START,
};

#[derive(Parser)]
#[command(name = "netdiag")]
#[command(about = "Network Diagnostics CLI: ping, traceroute, dns and port scan.")]
#[command(version)]
pub struct DiagCommandLine {
    #[command(subcommand)]
    pub command: Option<DiagCommands>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum DiagCommands {
    /// Ping a target host
    Ping {
        /// Target hostname or IP
        target: String,
        /// Number of ping packets to send
        #[arg(short, long, default_value_t = DEFAULT_PING_COUNT)]
        count: u32,
    },
    /// Traceroute to a target host
    Traceroute {
        /// Target hostname or IP
        target: String,
    },
    /// DNS lookup for a domain
    Dns {
        /// Domain name to look up
        domain: String,
        /// Ask this server instead of the system resolver
        #[arg(long)]
        dns_server: Option<IpAddr>,
    },
    /// TCP connect scan of a port range
    #[command(alias = "s")]
    Scan {
        /// Target hostname or IP
        host: String,
        #[arg(long, default_value_t = DEFAULT_SCAN_START)]
        start: u16,
        #[arg(long, default_value_t = DEFAULT_SCAN_END)]
        end: u16,
        /// Per-port connect timeout in milliseconds
        #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_millis() as u64)]
        timeout_ms: u64,
        /// Connect attempts in flight at once
        #[arg(long, default_value_t = DEFAULT_SCAN_CONCURRENCY)]
        concurrency: usize,
    },
}

impl DiagCommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}

#[derive(Parser)]
#[command(name = "subnetcalc")]
#[command(about = "Subnetting Calculator CLI")]
#[command(version)]
pub struct SubnetCommandLine {
    /// IP address, e.g. 192.168.1.0
    pub ip: String,

    /// Prefix length in CIDR notation, e.g. 24
    #[arg(allow_negative_numbers = true)]
    pub subnet: i64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl SubnetCommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
