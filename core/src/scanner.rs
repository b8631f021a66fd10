//! TCP connect port scan.
//!
//! Every port in the range gets one connect attempt bounded by
//! [`ScanOptions::timeout`]. Up to [`ScanOptions::concurrency`] attempts run at
//! once; the report is always sorted ascending regardless of completion order.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use netkit_common::config::ScanOptions;
use netkit_common::network::ports::{PortRange, ScanReport};
use tokio::net::lookup_host;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::network::tcp;

/// Scans `host` over `range` and returns the ports that accepted a connection.
pub async fn scan_ports(host: &str, range: PortRange, opts: ScanOptions) -> ScanReport {
    scan_ports_with_progress(host, range, opts, |_| {}).await
}

/// Same as [`scan_ports`], calling `on_port_done` once per probed port.
///
/// An unresolvable host yields an empty report, exactly as if every port were closed.
pub async fn scan_ports_with_progress<F>(
    host: &str,
    range: PortRange,
    opts: ScanOptions,
    on_port_done: F,
) -> ScanReport
where
    F: Fn(u16) + Send + Sync + 'static,
{
    let Some(ip) = resolve(host).await else {
        return ScanReport::default();
    };

    debug!(%ip, %range, concurrency = opts.concurrency, "starting port scan");

    let semaphore = Arc::new(Semaphore::new(opts.concurrency.max(1)));
    let on_port_done = Arc::new(on_port_done);
    let mut tasks: JoinSet<(u16, bool)> = JoinSet::new();

    for port in range.to_iter() {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };
        let on_port_done = on_port_done.clone();
        let timeout = opts.timeout;

        tasks.spawn(async move {
            let open = tcp::connect_probe(SocketAddr::new(ip, port), timeout).await;
            drop(permit);
            on_port_done(port);
            (port, open)
        });
    }

    let mut open_ports: Vec<u16> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((port, true)) if range.contains(port) => open_ports.push(port),
            Ok(_) => {}
            Err(e) => warn!("Port probe task failed: {}", e),
        }
    }

    open_ports.sort_unstable();
    open_ports.dedup();

    debug!(%ip, open = open_ports.len(), "port scan finished");
    ScanReport { open_ports }
}

/// Resolves `host` once, preferring IPv4.
async fn resolve(host: &str) -> Option<IpAddr> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Some(ip);
    }

    match lookup_host((host, 0)).await {
        Ok(addrs) => {
            let addrs: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
            let ip = addrs
                .iter()
                .find(|ip| ip.is_ipv4())
                .or_else(|| addrs.first())
                .copied();
            if ip.is_none() {
                warn!("'{}' resolved to no addresses, reporting every port closed", host);
            }
            ip
        }
        Err(e) => {
            warn!("Could not resolve '{}' ({}), reporting every port closed", host, e);
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
