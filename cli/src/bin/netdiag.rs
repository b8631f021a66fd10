use std::time::Duration;

use netkit_cli::commands::{DiagCommandLine, DiagCommands, diagnose, scan};
use netkit_cli::terminal::logging;
use netkit_common::config::{DiagnosticsConfig, ScanOptions};
use netkit_core::diagnostics::DiagnosticsService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = DiagCommandLine::parse_args();

    logging::init(commands.verbose);

    let Some(command) = commands.command else {
        DiagCommandLine::print_help()?;
        return Ok(());
    };

    match command {
        DiagCommands::Ping { target, count } => {
            let service = DiagnosticsService::system(DiagnosticsConfig::system_resolver());
            diagnose::ping(&service, &target, count).await
        }
        DiagCommands::Traceroute { target } => {
            let service = DiagnosticsService::system(DiagnosticsConfig::system_resolver());
            diagnose::traceroute(&service, &target).await
        }
        DiagCommands::Dns { domain, dns_server } => {
            let cfg = DiagnosticsConfig {
                dns_server,
                ..DiagnosticsConfig::system_resolver()
            };
            let service = DiagnosticsService::system(cfg);
            diagnose::dns_lookup(&service, &domain).await
        }
        DiagCommands::Scan {
            host,
            start,
            end,
            timeout_ms,
            concurrency,
        } => {
            let opts = ScanOptions {
                timeout: Duration::from_millis(timeout_ms),
                concurrency,
            };
            scan::scan(&host, start, end, opts).await
        }
    }
}
