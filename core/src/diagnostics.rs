//! # Network Diagnostics Service
//!
//! Runs the operating system's `ping`, `traceroute` and `nslookup` and hands
//! their standard output back verbatim. Nothing here interprets the output.
//!
//! Process execution goes through the [`CommandRunner`] port, so the service
//! never touches `std::process` directly.

use std::io;

use netkit_common::config::{DEFAULT_PING_COUNT, DiagnosticsConfig};
use netkit_common::diagnostics::{DiagnosticOutput, Tool};
use netkit_common::error::DiagnosticError;
use netkit_common::process::CommandRunner;
use tracing::{debug, warn};

use crate::process::SystemRunner;

pub type DiagnosticResult = Result<DiagnosticOutput, DiagnosticError>;

/// Application service for the diagnostics tool.
///
/// Validates the input, builds the argument list for one OS utility and
/// delegates the run to the [`CommandRunner`].
pub struct DiagnosticsService {
    runner: Box<dyn CommandRunner>,
    config: DiagnosticsConfig,
}

impl DiagnosticsService {
    pub fn new(runner: Box<dyn CommandRunner>, config: DiagnosticsConfig) -> Self {
        Self { runner, config }
    }

    /// Service backed by real processes on this host.
    pub fn system(config: DiagnosticsConfig) -> Self {
        Self::new(Box::new(SystemRunner), config)
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    /// Sends `count` echo requests (4 when `None`) to `target`.
    pub async fn ping(&self, target: &str, count: Option<u32>) -> DiagnosticResult {
        let target = require_host("target", target)?;
        let count = count.unwrap_or(DEFAULT_PING_COUNT);

        if count == 0 || count > self.config.max_ping_count {
            return Err(DiagnosticError::InvalidInput(format!(
                "'count' must be between 1 and {}",
                self.config.max_ping_count
            )));
        }

        let args = vec!["-c".to_string(), count.to_string(), target.to_string()];
        self.invoke(Tool::Ping, args).await
    }

    pub async fn traceroute(&self, target: &str) -> DiagnosticResult {
        let target = require_host("target", target)?;
        self.invoke(Tool::Traceroute, vec![target.to_string()]).await
    }

    /// Looks `domain` up with `nslookup`, against the configured server if any.
    pub async fn dns_lookup(&self, domain: &str) -> DiagnosticResult {
        let domain = require_host("domain", domain)?;

        let mut args = vec![domain.to_string()];
        if let Some(server) = self.config.dns_server {
            args.push(server.to_string());
        }

        self.invoke(Tool::Nslookup, args).await
    }

    async fn invoke(&self, tool: Tool, args: Vec<String>) -> DiagnosticResult {
        debug!(%tool, ?args, "running diagnostic");

        let output = self
            .runner
            .run(tool.program(), &args)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => DiagnosticError::ToolMissing { tool },
                _ => DiagnosticError::Spawn { tool, source },
            })?;

        if !output.success() {
            warn!(%tool, status = ?output.status, "diagnostic command failed");
            let message = if output.stderr.trim().is_empty() {
                tool.failure_message().to_string()
            } else {
                output.stderr
            };
            return Err(DiagnosticError::ToolFailure { tool, message });
        }

        Ok(DiagnosticOutput::from(output.stdout))
    }
}

/// Rejects empty values and values the utility would read as an option.
fn require_host<'a>(name: &'static str, value: &'a str) -> Result<&'a str, DiagnosticError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DiagnosticError::MissingParameter(name));
    }
    if value.starts_with('-') {
        return Err(DiagnosticError::InvalidInput(format!(
            "'{name}' must not start with '-'"
        )));
    }
    Ok(value)
}
