//! # Error Taxonomy
//!
//! Errors shared by every front-end. The CLI turns them into an exit status,
//! the HTTP services into a status code plus an `{"error": ...}` body, so each
//! variant's `Display` is the user-facing message.

use std::io;

use thiserror::Error;

use crate::diagnostics::Tool;

/// Failure of a diagnostic (ping, traceroute, DNS lookup) or of scan input validation.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// A required argument or query parameter was absent or empty.
    #[error("Missing '{0}' parameter")]
    MissingParameter(&'static str),

    /// An argument was present but unusable (bad count, bad port range, ...).
    #[error("{0}")]
    InvalidInput(String),

    /// The OS utility is not installed.
    #[error("'{tool}' command not found. Please install {package}.", package = .tool.package())]
    ToolMissing { tool: Tool },

    /// The OS utility ran and exited non-zero. `message` is its captured stderr.
    #[error("{message}")]
    ToolFailure { tool: Tool, message: String },

    /// The process could not be started for a reason other than a missing binary.
    #[error("Failed to start '{tool}': {source}")]
    Spawn {
        tool: Tool,
        #[source]
        source: io::Error,
    },
}

impl DiagnosticError {
    /// `true` for everything caused by the request or the remote side,
    /// `false` for local faults (the process could not be spawned).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DiagnosticError::Spawn { .. })
    }
}

/// Failure of a subnet calculation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Please provide 'ip' and 'subnet' parameters.")]
    MissingParameter,

    #[error("'subnet' must be an integer.")]
    NotAnInteger,

    #[error("'{0}' does not appear to be an IPv4 or IPv6 address")]
    InvalidAddress(String),

    #[error("Invalid prefix length /{prefix}: must be between 0 and {max}")]
    InvalidPrefix { prefix: i64, max: u8 },
}
