//! # HTTP front-ends
//!
//! Two independent axum services sharing the core logic with the CLIs:
//! * [`diagnostics::router`]: `/ping`, `/traceroute`, `/dns`, `/scan` and `/`.
//! * [`subnet::router`]: `/calculate`.
//!
//! Both allow any origin and answer failures with `{"error": "..."}`.

pub mod args;
pub mod diagnostics;
pub mod error;
pub mod params;
pub mod subnet;

use std::io;

use anyhow::Context;
use axum::Router;
use netkit_common::config::ServerConfig;
use netkit_common::success;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Installs the global subscriber, honoring `RUST_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Binds `cfg` and serves `app` until Ctrl-C.
pub async fn serve(app: Router, cfg: ServerConfig) -> anyhow::Result<()> {
    let addr = cfg.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    success!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. A signal that cannot be installed never resolves.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("Could not listen for Ctrl-C ({}), serving until killed", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
