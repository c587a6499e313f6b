mod common;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use board_report::routes::app_router;
use std::net::SocketAddr;
use tower::ServiceExt;

fn request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .extension(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let fx = common::create_fixture();
    fx.write_directory(common::DIRECTORY);
    let app = app_router(fx.state.clone(), 2, 100);

    let response = app.oneshot(request("/health/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_burst_exhaustion_is_rate_limited() {
    let fx = common::create_fixture();
    let app = app_router(fx.state.clone(), 60, 2);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(request("/api/report?date=2024/01/02"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(request("/api/report?date=2024/01/02"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let fx = common::create_fixture();
    let app = app_router(fx.state.clone(), 2, 100);

    let response = app.oneshot(request("/admin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
