use std::fmt;

use serde::Serialize;

/// The OS utilities the diagnostics service drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Ping,
    Traceroute,
    Nslookup,
}

impl Tool {
    /// Executable name looked up on `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            Tool::Ping => "ping",
            Tool::Traceroute => "traceroute",
            Tool::Nslookup => "nslookup",
        }
    }

    /// Distribution package that ships the executable.
    pub fn package(self) -> &'static str {
        match self {
            Tool::Ping => "iputils-ping",
            Tool::Traceroute => "traceroute",
            Tool::Nslookup => "dnsutils",
        }
    }

    /// Reported when the tool fails without writing anything to stderr.
    pub fn failure_message(self) -> &'static str {
        match self {
            Tool::Ping => "Ping failed.",
            Tool::Traceroute => "Traceroute failed.",
            Tool::Nslookup => "DNS lookup failed.",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Verbatim standard output of a successful diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticOutput {
    pub output: String,
}

impl From<String> for DiagnosticOutput {
    fn from(output: String) -> Self {
        Self { output }
    }
}
