use axum::http::StatusCode;
use netkit_api::subnet::router;

use crate::utils::get;

#[tokio::test]
async fn calculates_class_c() {
    let response = get(router(), "/calculate?ip=192.168.1.0&subnet=24").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        serde_json::json!({
            "network": "192.168.1.0/24",
            "network_address": "192.168.1.0",
            "broadcast_address": "192.168.1.255",
            "number_of_hosts": 254
        })
    );
}

#[tokio::test]
async fn host_bits_are_ignored() {
    let response = get(router(), "/calculate?ip=10.20.30.40&subnet=8").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["network"], "10.0.0.0/8");
    assert_eq!(body["broadcast_address"], "10.255.255.255");
    assert_eq!(body["number_of_hosts"], 16_777_214);
}

#[tokio::test]
async fn ipv6_has_no_broadcast() {
    let response = get(router(), "/calculate?ip=2001:db8::1&subnet=64").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["network"], "2001:db8::/64");
    assert!(body.get("broadcast_address").is_none());
}

#[tokio::test]
async fn missing_parameters_are_bad_requests() {
    for uri in [
        "/calculate",
        "/calculate?ip=192.168.1.0",
        "/calculate?subnet=24",
        "/calculate?ip=&subnet=24",
    ] {
        let response = get(router(), uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.json()["error"],
            "Please provide 'ip' and 'subnet' parameters.",
            "{uri}"
        );
    }
}

#[tokio::test]
async fn non_integer_subnet_is_bad_request() {
    let response = get(router(), "/calculate?ip=192.168.1.0&subnet=abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "'subnet' must be an integer.");
}

#[tokio::test]
async fn invalid_address_is_bad_request() {
    let response = get(router(), "/calculate?ip=999.999.999.999&subnet=24").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        "'999.999.999.999' does not appear to be an IPv4 or IPv6 address"
    );
}

#[tokio::test]
async fn prefix_out_of_range_is_bad_request() {
    let response = get(router(), "/calculate?ip=192.168.1.0&subnet=999").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].as_str().unwrap().contains("/999"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = get(router(), "/calculate?ip=192.168.1.0&subnet=24").await;

    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn repeated_keys_use_first_value() {
    let response = get(router(), "/calculate?ip=10.0.0.0&ip=oops&subnet=8&subnet=x").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["network"], "10.0.0.0/8");
}

#[tokio::test]
async fn ipv6_host_count_excludes_two_addresses() {
    let response = get(router(), "/calculate?ip=2001:db8::&subnet=120").await;
    assert_eq!(response.json()["number_of_hosts"], 254);

    let response = get(router(), "/calculate?ip=::1&subnet=128").await;
    assert_eq!(response.json()["number_of_hosts"], 0);

    let response = get(router(), "/calculate?ip=::&subnet=0").await;
    assert!(response
        .text()
        .contains(r#""number_of_hosts":340282366920938463463374607431768211454"#));
}
