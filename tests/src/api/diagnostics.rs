use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use netkit_api::diagnostics::{DiagnosticsState, router};
use netkit_common::config::{DiagnosticsConfig, ScanOptions};
use netkit_core::diagnostics::DiagnosticsService;
use tokio::net::TcpListener;

use crate::utils::{Calls, Canned, FakeRunner, get};

fn app(canned: Canned) -> (Router, Calls) {
    let (runner, calls) = FakeRunner::new(canned);
    let service = DiagnosticsService::new(Box::new(runner), DiagnosticsConfig::public_resolver());
    let scan = ScanOptions {
        timeout: Duration::from_millis(300),
        concurrency: 32,
    };
    (router(DiagnosticsState::new(service, scan)), calls)
}

#[tokio::test]
async fn index_lists_endpoints() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/").await;

    assert_eq!(response.status, StatusCode::OK);
    let text = response.text();
    assert!(text.starts_with("Network Diagnostics API\n"));
    assert!(text.contains(" - /scan?host=<host>&start=<int>&end=<int>\n"));
}

#[tokio::test]
async fn ping_returns_output() {
    let (app, calls) = app(Canned::ok("64 bytes from 127.0.0.1"));

    let response = get(app, "/ping?target=127.0.0.1&count=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["output"], "64 bytes from 127.0.0.1");
    assert_eq!(calls.lock().unwrap()[0].1, vec!["-c", "2", "127.0.0.1"]);
}

#[tokio::test]
async fn ping_count_defaults_to_four() {
    let (app, calls) = app(Canned::ok(""));

    get(app, "/ping?target=example.com").await;

    assert_eq!(calls.lock().unwrap()[0].1, vec!["-c", "4", "example.com"]);
}

#[tokio::test]
async fn ping_without_target_is_bad_request() {
    let (app, calls) = app(Canned::ok(""));

    let response = get(app, "/ping").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing 'target' parameter");
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ping_with_bad_count_is_bad_request() {
    let (app, calls) = app(Canned::ok(""));

    let response = get(app.clone(), "/ping?target=example.com&count=lots").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());

    let response = get(app, "/ping?target=example.com&count=0").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ping_failure_carries_stderr() {
    let (app, _) = app(Canned::failed(2, "ping: nope.invalid: Name or service not known\n"));

    let response = get(app, "/ping?target=nope.invalid").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        "ping: nope.invalid: Name or service not known\n"
    );
}

#[tokio::test]
async fn traceroute_not_installed() {
    let (app, _) = app(Canned::NotFound);

    let response = get(app, "/traceroute?target=example.com").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        "'traceroute' command not found. Please install traceroute."
    );
}

#[tokio::test]
async fn traceroute_without_target_is_bad_request() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/traceroute?target=").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing 'target' parameter");
}

#[tokio::test]
async fn traceroute_failure_without_stderr_uses_generic_message() {
    let (app, _) = app(Canned::failed(1, ""));

    let response = get(app, "/traceroute?target=example.com").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Traceroute failed.");
}

#[tokio::test]
async fn dns_pins_public_resolver() {
    let (app, calls) = app(Canned::ok("Server: 8.8.8.8"));

    let response = get(app, "/dns?domain=example.com").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["output"], "Server: 8.8.8.8");
    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].0, "nslookup");
    assert_eq!(calls[0].1, vec!["example.com", "8.8.8.8"]);
}

#[tokio::test]
async fn dns_without_domain_is_bad_request() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/dns").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing 'domain' parameter");
}

#[tokio::test]
async fn spawn_failure_is_server_error() {
    let (app, _) = app(Canned::Denied);

    let response = get(app, "/dns?domain=example.com").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn scan_without_host_is_bad_request() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/scan").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing 'host' parameter");
}

#[tokio::test]
async fn scan_rejects_inverted_range() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/scan?host=127.0.0.1&start=100&end=10").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"]
        .as_str()
        .unwrap()
        .contains("greater than end"));
}

#[tokio::test]
async fn scan_rejects_out_of_range_port() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/scan?host=127.0.0.1&start=1&end=70000").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scan_reports_listening_loopback_port() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (app, _) = app(Canned::ok(""));

    let response = get(app, &format!("/scan?host=127.0.0.1&start={port}&end={port}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!({ "open_ports": [port] }));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/").await;

    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn repeated_key_uses_first_value() {
    let (app, calls) = app(Canned::ok("reply"));

    let response = get(app, "/ping?target=a.example&target=b.example").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["output"], "reply");
    assert_eq!(calls.lock().unwrap()[0].1, vec!["-c", "4", "a.example"]);
}

#[tokio::test]
async fn repeated_key_errors_stay_json() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/ping?target=a.example&target=b.example&count=x&count=y").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "'count' must be a positive integer");
}

#[tokio::test]
async fn missing_target_is_reported_before_bad_count() {
    let (app, _) = app(Canned::ok(""));

    let response = get(app, "/ping?count=abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing 'target' parameter");
}
