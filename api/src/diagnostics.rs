use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use netkit_common::config::{DEFAULT_SCAN_END, DEFAULT_SCAN_START, ScanOptions};
use netkit_common::diagnostics::DiagnosticOutput;
use netkit_common::error::DiagnosticError;
use netkit_common::network::ports::{PortRange, ScanReport};
use netkit_core::diagnostics::DiagnosticsService;
use netkit_core::scanner;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ApiError;
use crate::params::QueryPairs;

const INDEX: &str = "Network Diagnostics API\n\
Available endpoints:\n \
- /ping?target=<host>&count=<int>\n \
- /traceroute?target=<host>\n \
- /dns?domain=<domain>\n \
- /scan?host=<host>&start=<int>&end=<int>\n";

#[derive(Clone)]
pub struct DiagnosticsState {
    pub service: Arc<DiagnosticsService>,
    pub scan: ScanOptions,
}

impl DiagnosticsState {
    pub fn new(service: DiagnosticsService, scan: ScanOptions) -> Self {
        Self {
            service: Arc::new(service),
            scan,
        }
    }
}

pub fn router(state: DiagnosticsState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ping", get(ping))
        .route("/traceroute", get(traceroute))
        .route("/dns", get(dns))
        .route("/scan", get(scan))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn index() -> &'static str {
    INDEX
}

async fn ping(
    State(state): State<DiagnosticsState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<DiagnosticOutput>, ApiError> {
    let query = QueryPairs::from(query);
    let target = required(&query, "target")?;
    info!("Ping endpoint called with target={}", target);

    let count: Option<u32> = parse_param("count", query.first("count"), "a positive integer")?;
    Ok(Json(state.service.ping(&target, count).await?))
}

async fn traceroute(
    State(state): State<DiagnosticsState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<DiagnosticOutput>, ApiError> {
    let target = required(&QueryPairs::from(query), "target")?;
    info!("Traceroute endpoint called with target={}", target);

    Ok(Json(state.service.traceroute(&target).await?))
}

async fn dns(
    State(state): State<DiagnosticsState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<DiagnosticOutput>, ApiError> {
    let domain = required(&QueryPairs::from(query), "domain")?;
    info!("DNS endpoint called with domain={}", domain);

    Ok(Json(state.service.dns_lookup(&domain).await?))
}

async fn scan(
    State(state): State<DiagnosticsState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ScanReport>, ApiError> {
    let query = QueryPairs::from(query);
    let host = required(&query, "host")?;

    const PORT: &str = "a port number between 1 and 65535";
    let start = parse_param("start", query.first("start"), PORT)?.unwrap_or(DEFAULT_SCAN_START);
    let end = parse_param("end", query.first("end"), PORT)?.unwrap_or(DEFAULT_SCAN_END);
    let range = PortRange::new(start, end)?;

    info!("Scan endpoint called with host={}, ports={}", host, range);
    Ok(Json(scanner::scan_ports(&host, range, state.scan).await))
}

fn required(query: &QueryPairs, name: &'static str) -> Result<String, DiagnosticError> {
    query
        .first(name)
        .ok_or(DiagnosticError::MissingParameter(name))
}

/// Parses an optional query value. Absent means "use the default".
fn parse_param<T: FromStr>(
    name: &str,
    raw: Option<String>,
    expected: &str,
) -> Result<Option<T>, DiagnosticError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| DiagnosticError::InvalidInput(format!("'{name}' must be {expected}"))),
    }
}
