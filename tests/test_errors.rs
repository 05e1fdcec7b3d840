//! Error handling tests
//!
//! Local input errors must fail before anything reaches the network.
mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{mealie, request_count, MockEnvironment, TEST_TOKEN};

#[test]
fn test_missing_url() {
    let mut env = MockEnvironment::new();
    env.set_env("MEALIE_TOKEN", TEST_TOKEN);
    let r = mealie(&["recipes"], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Error: MEALIE_URL environment variable is not set"));
    assert!(r.stderr.contains("export MEALIE_URL="));
    assert!(r.stdout.is_empty());
}

#[test]
fn test_missing_token() {
    let mut env = MockEnvironment::new();
    env.set_env("MEALIE_URL", "http://127.0.0.1:9/api");
    let r = mealie(&["recipes"], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Error: MEALIE_TOKEN environment variable is not set"));
    assert!(r.stderr.contains("export MEALIE_TOKEN="));
}

#[test]
fn test_missing_endpoint_is_usage_error() {
    let env = MockEnvironment::new();
    let r = mealie(&[], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let env = MockEnvironment::new();
    let r = mealie(&["--help"], &env);

    assert_eq!(r.exit_code, 0);
    assert!(r.stdout.contains("--multipart"));
    assert!(r.stdout.contains("MEALIE_URL"));
}

#[tokio::test]
async fn test_malformed_payload_sends_nothing() {
    let server = MockServer::start().await;

    let env = MockEnvironment::for_server(&server.uri());
    let r = mealie(&["recipes", "{not json"], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Error: Invalid JSON payload"));
    assert!(r.stderr.contains("Original payload: {not json"));
    assert!(r.stderr.contains("Attempted fix: {not json"));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_invalid_method_sends_nothing() {
    let server = MockServer::start().await;

    let env = MockEnvironment::for_server(&server.uri());
    let r = mealie(&["recipes", r#"{"a":1}"#, "FETCH"], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Unsupported HTTP method: FETCH"));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_not_found_prints_body_and_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let env = MockEnvironment::for_server(&server.uri());
    let r = mealie(&["recipes/missing"], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.contains("✗ Client Error (HTTP 404)"));
    assert_eq!(r.response_json(), Some(json!({"detail": "Not Found"})));
}

#[tokio::test]
async fn test_server_error_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let env = MockEnvironment::for_server(&server.uri());
    let r = mealie(&["recipes", r#"{"name":"X"}"#], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.contains("✗ Server Error (HTTP 500)"));
    assert!(r.contains("boom"));
}

#[test]
fn test_connection_refused() {
    let mut env = MockEnvironment::new();
    // port 9 (discard) is not listening on test machines
    env.set_env("MEALIE_URL", "http://127.0.0.1:9/api");
    env.set_env("MEALIE_TOKEN", TEST_TOKEN);
    let r = mealie(&["recipes"], &env);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Error: Request failed"));
}

#[tokio::test]
async fn test_out_of_range_timeout_is_rejected_before_output() {
    let server = MockServer::start().await;

    let env = MockEnvironment::for_server(&server.uri());
    for timeout in ["1e20", "inf"] {
        let r = mealie(&["--timeout", timeout, "recipes"], &env);

        assert_eq!(r.exit_code, 1, "timeout {}", timeout);
        assert!(r.stderr.contains("timeout must be between 0 and 86400 seconds"));
        assert!(!r.stderr.contains("panicked"));
        assert!(r.stdout.is_empty());
    }
    assert_eq!(request_count(&server).await, 0);
}
