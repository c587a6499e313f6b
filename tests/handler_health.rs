mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_all_inputs_present() {
    let fx = common::create_fixture();
    fx.write_directory(common::DIRECTORY);
    let server = fx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["count_data"]["status"], "ok");
    assert_eq!(json["checks"]["board_directory"]["message"], "3 boards mapped");
    assert_eq!(json["checks"]["cache"]["message"], "memory, 1 file cached");
}

#[tokio::test]
async fn test_health_degraded_without_directory() {
    let fx = common::create_fixture();
    let server = fx.server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["count_data"]["status"], "ok");
    assert_eq!(json["checks"]["board_directory"]["status"], "error");
}

#[tokio::test]
async fn test_health_degraded_without_count_dir() {
    let fx = common::create_fixture();
    fx.write_directory(common::DIRECTORY);
    std::fs::remove_dir(fx.counts_dir()).unwrap();
    let server = fx.server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<Value>();
    assert_eq!(json["checks"]["count_data"]["status"], "error");
}
