use std::net::{IpAddr, Ipv4Addr};

use serde::Serialize;

/// Summary of the network an address belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetSummary {
    /// Canonical CIDR, host bits cleared (e.g. `192.168.1.0/24`).
    pub network: String,
    pub network_address: IpAddr,
    /// IPv6 has no broadcast address, so this is only set for IPv4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_address: Option<Ipv4Addr>,
    /// Addresses in the network minus two, floored at zero, for both families.
    pub number_of_hosts: u128,
}
