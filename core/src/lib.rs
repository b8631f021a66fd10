//! # netkit core
//!
//! * [`diagnostics`]: ping, traceroute and DNS lookups through the OS utilities.
//! * [`scanner`]: TCP connect port scan.
//! * [`subnet`]: CIDR arithmetic.

pub mod diagnostics;
pub mod network;
pub mod process;
pub mod scanner;
pub mod subnet;
