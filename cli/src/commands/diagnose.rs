use anyhow::Context;
use netkit_common::diagnostics::DiagnosticOutput;
use netkit_core::diagnostics::DiagnosticsService;
use tracing::info;

use crate::terminal::print;

pub async fn ping(service: &DiagnosticsService, target: &str, count: u32) -> anyhow::Result<()> {
    print::header(&format!("pinging {target} with {count} packets"));
    info!("Ping called with target={}, count={}", target, count);

    let result = service
        .ping(target, Some(count))
        .await
        .with_context(|| format!("Ping to {target} failed"))?;

    print_output(&result);
    Ok(())
}

pub async fn traceroute(service: &DiagnosticsService, target: &str) -> anyhow::Result<()> {
    print::header(&format!("tracing route to {target}"));

    let result = service
        .traceroute(target)
        .await
        .with_context(|| format!("Traceroute to {target} failed"))?;

    print_output(&result);
    Ok(())
}

pub async fn dns_lookup(service: &DiagnosticsService, domain: &str) -> anyhow::Result<()> {
    print::header(&format!("looking up {domain}"));
    if let Some(server) = service.config().dns_server {
        info!("Using DNS server {}", server);
    }

    let result = service
        .dns_lookup(domain)
        .await
        .with_context(|| format!("DNS lookup for {domain} failed"))?;

    print_output(&result);
    Ok(())
}

fn print_output(result: &DiagnosticOutput) {
    print::print(result.output.trim_end());
}
