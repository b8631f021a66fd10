//! CIDR arithmetic.
//!
//! All of the bit work is done by [`pnet::ipnetwork`]; this module only picks
//! the fields the front-ends report and computes the host count.

use std::net::IpAddr;

use netkit_common::error::SubnetError;
use netkit_common::network::subnet::SubnetSummary;
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

pub type SubnetResult = Result<SubnetSummary, SubnetError>;

const IPV4_BITS: u8 = 32;
const IPV6_BITS: u8 = 128;

/// Summarizes the network `address/prefix_len` belongs to.
///
/// Host bits in `address` are ignored, so `192.168.1.77/24` and
/// `192.168.1.0/24` give the same result.
pub fn compute_subnet(address: &str, prefix_len: i64) -> SubnetResult {
    let addr: IpAddr = address
        .trim()
        .parse()
        .map_err(|_| SubnetError::InvalidAddress(address.to_string()))?;

    let max = match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    };
    let invalid_prefix = SubnetError::InvalidPrefix {
        prefix: prefix_len,
        max,
    };
    let prefix = u8::try_from(prefix_len)
        .ok()
        .filter(|prefix| *prefix <= max)
        .ok_or_else(|| invalid_prefix.clone())?;

    let network = IpNetwork::new(addr, prefix).map_err(|_| invalid_prefix)?;

    Ok(match network {
        IpNetwork::V4(net) => summarize_v4(net),
        IpNetwork::V6(net) => summarize_v6(net),
    })
}

/// Parses the textual prefix length of a request.
pub fn parse_prefix(raw: &str) -> Result<i64, SubnetError> {
    raw.trim().parse().map_err(|_| SubnetError::NotAnInteger)
}

fn summarize_v4(net: Ipv4Network) -> SubnetSummary {
    let prefix = net.prefix();
    let total: u128 = 1 << (IPV4_BITS - prefix);

    SubnetSummary {
        network: format!("{}/{}", net.network(), prefix),
        network_address: IpAddr::V4(net.network()),
        broadcast_address: Some(net.broadcast()),
        // /31 and /32 have nothing left once network and broadcast are taken out
        number_of_hosts: total.saturating_sub(2),
    }
}

fn summarize_v6(net: Ipv6Network) -> SubnetSummary {
    let prefix = net.prefix();
    // 2^128 itself does not fit, but 2^128 - 2 does
    let usable = match 1u128.checked_shl(u32::from(IPV6_BITS - prefix)) {
        Some(total) => total.saturating_sub(2),
        None => u128::MAX - 1,
    };

    SubnetSummary {
        network: format!("{}/{}", net.network(), prefix),
        network_address: IpAddr::V6(net.network()),
        broadcast_address: None,
        number_of_hosts: usable,
    }
}
