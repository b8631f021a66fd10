use std::fmt;

use serde::Serialize;

use crate::error::DiagnosticError;

/// Inclusive, validated range of TCP ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Builds a range, rejecting port 0 and inverted bounds.
    pub fn new(start: u16, end: u16) -> Result<Self, DiagnosticError> {
        if start == 0 {
            return Err(DiagnosticError::InvalidInput(
                "Port numbers start at 1".to_string(),
            ));
        }
        if start > end {
            return Err(DiagnosticError::InvalidInput(format!(
                "Invalid port range: start ({start}) is greater than end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }

    pub fn to_iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Ports that accepted a TCP connection, ascending and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub open_ports: Vec<u16>,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
