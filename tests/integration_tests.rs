// Integration tests: HTTP endpoints

mod common;

use axum_test::TestServer;
use goblin_monitor::config::AppConfig;
use goblin_monitor::models::{OverviewReport, ProcessedData, ResolversReport};
use goblin_monitor::routes;

const TEST_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[processing]
max_snapshot_bytes = 65536
parallel_modes = true
"#;

fn test_server(parallel_modes: bool) -> TestServer {
    let mut config = AppConfig::load_from_str(TEST_CONFIG).unwrap();
    config.processing.parallel_modes = parallel_modes;
    TestServer::new(routes::app(config)).unwrap()
}

fn test_server_with_body_limit(max_snapshot_bytes: usize) -> TestServer {
    let mut config = AppConfig::load_from_str(TEST_CONFIG).unwrap();
    config.processing.max_snapshot_bytes = max_snapshot_bytes;
    TestServer::new(routes::app(config)).unwrap()
}

fn json_body(s: &str) -> serde_json::Value {
    serde_json::from_str(s).unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let server = test_server(true);
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("goblin-monitor: telemetry digest");
}

#[tokio::test]
async fn test_version_endpoint() {
    let server = test_server(true);
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(
        json.get("name").and_then(|v| v.as_str()),
        Some("goblin-monitor")
    );
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_process_returns_both_modes() {
    for parallel in [true, false] {
        let server = test_server(parallel);
        let response = server
            .post("/api/process")
            .json(&json_body(common::WIDGET_SNAPSHOT))
            .await;
        response.assert_status_ok();
        let data: ProcessedData = response.json();
        assert_eq!(data.overview.summary.num_total_requests, 1);
        assert_eq!(data.overview.requests.times, vec![0]);
        assert_eq!(data.resolvers.invocation_counts["Widget:resolve"], 2);
        assert_eq!(data.resolvers.average_time, 20.0);
    }
}

#[tokio::test]
async fn test_overview_endpoint() {
    let server = test_server(true);
    let response = server
        .post("/api/overview")
        .json(&json_body(common::PING_SNAPSHOT))
        .await;
    response.assert_status_ok();
    let report: OverviewReport = response.json();
    assert_eq!(report.response.ave, 15.0);
    assert_eq!(report.response.bucket_means, vec![10.0, 20.0]);
}

#[tokio::test]
async fn test_resolvers_endpoint_on_empty_snapshot() {
    let server = test_server(true);
    let response = server
        .post("/api/resolvers")
        .json(&json_body(common::EMPTY_SNAPSHOT))
        .await;
    response.assert_status_ok();
    let report: ResolversReport = response.json();
    assert!(report.invocation_counts.is_empty());
    assert_eq!(report.average_time, 0.0);
}

#[tokio::test]
async fn test_missing_query_is_unprocessable() {
    let server = test_server(true);
    let response = server
        .post("/api/process")
        .json(&serde_json::json!({ "Widget": { "resolve": [] } }))
        .expect_failure()
        .await;
    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("Query"));
}

#[tokio::test]
async fn test_malformed_record_is_rejected() {
    let server = test_server(true);
    let response = server
        .post("/api/process")
        .json(&serde_json::json!({ "Query": { "a": [ { "time": 0 } ] } }))
        .expect_failure()
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_snapshot_over_body_limit_is_rejected() {
    let server = test_server_with_body_limit(16);
    let response = server
        .post("/api/process")
        .json(&json_body(common::WIDGET_SNAPSHOT))
        .expect_failure()
        .await;
    response.assert_status(axum::http::StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_snapshot_within_body_limit_is_accepted() {
    let server = test_server_with_body_limit(4096);
    let response = server
        .post("/api/process")
        .json(&json_body(common::WIDGET_SNAPSHOT))
        .await;
    response.assert_status_ok();
}
