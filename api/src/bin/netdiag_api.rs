use clap::Parser;
use netkit_api::args::DiagnosticsApiArgs;
use netkit_api::diagnostics::{self, DiagnosticsState};
use netkit_core::diagnostics::DiagnosticsService;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = DiagnosticsApiArgs::parse();

    netkit_api::init_logging();

    let cfg = args.diagnostics();
    match cfg.dns_server {
        Some(server) => info!("DNS lookups pinned to {}", server),
        None => info!("DNS lookups use the system resolver"),
    }

    let state = DiagnosticsState::new(DiagnosticsService::system(cfg), args.scan());
    netkit_api::serve(diagnostics::router(state), args.server()).await
}
