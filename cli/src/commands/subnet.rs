use std::net::IpAddr;

use colored::*;
use netkit_common::network::subnet::SubnetSummary;
use netkit_core::subnet;
use tracing::info;

use crate::terminal::{colors, print};

pub fn calculate(ip: &str, prefix_len: i64, json: bool) -> anyhow::Result<()> {
    info!("Calculating subnet for IP={}, CIDR={}", ip, prefix_len);
    let summary = subnet::compute_subnet(ip, prefix_len)?;

    if json {
        print::print(&serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print::header("subnet calculator");
    print::aligned_lines(&summary_lines(&summary));
    Ok(())
}

fn summary_lines(summary: &SubnetSummary) -> Vec<(&'static str, ColoredString)> {
    let mut lines: Vec<(&'static str, ColoredString)> = vec![
        ("Network", summary.network.as_str().bold()),
        ("Network address", addr(summary.network_address)),
    ];

    if let Some(broadcast) = summary.broadcast_address {
        lines.push(("Broadcast address", addr(IpAddr::V4(broadcast))));
    }

    lines.push((
        "Usable hosts",
        summary.number_of_hosts.to_string().color(colors::ACCENT),
    ));
    lines
}

fn addr(ip: IpAddr) -> ColoredString {
    match ip {
        IpAddr::V4(_) => ip.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(_) => ip.to_string().color(colors::IPV6_ADDR),
    }
}
