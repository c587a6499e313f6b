mod common;

use axum::http::StatusCode;
use board_report::domain::report_date::ReportDate;
use serde_json::Value;

#[tokio::test]
async fn test_report_ranked_json() {
    let fx = common::create_fixture();
    fx.write_directory(common::DIRECTORY);
    fx.write_counts(&common::date(2024, 1, 2), common::JSON_COUNTS);
    let server = fx.server();

    let response = server
        .get("/api/report")
        .add_query_param("date", "2024/01/02")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["date"], "2024/01/02");
    assert_eq!(json["grand_total"], 3019);
    assert_eq!(json["grand_total_display"], "3,019");
    assert_eq!(json["notices"].as_array().unwrap().len(), 0);

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["board_id"], "livejupiter");
    assert_eq!(entries[0]["server_host"], "hayabusa9");
    assert_eq!(entries[0]["unique_poster_count"], 3);
    assert_eq!(entries[0]["new_thread_count"], 80);
    assert_eq!(entries[3]["board_id"], "unlisted");
    assert_eq!(entries[3]["server_host"], "");
}

#[tokio::test]
async fn test_report_limit_keeps_grand_total() {
    let fx = common::create_fixture();
    fx.write_counts(&common::date(2024, 1, 2), common::JSON_COUNTS);
    let server = fx.server();

    let response = server
        .get("/api/report")
        .add_query_param("date", "2024/01/02")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert_eq!(json["grand_total"], 3019);
}

#[tokio::test]
async fn test_report_defaults_to_today() {
    let fx = common::create_fixture();
    let today = ReportDate::today();
    fx.write_counts(&today, "news\t10\n");
    let server = fx.server();

    let response = server.get("/api/report").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["date"], today.to_string());
    assert_eq!(json["grand_total"], 10);
}

#[tokio::test]
async fn test_report_without_data_has_notice() {
    let fx = common::create_fixture();
    let server = fx.server();

    let response = server
        .get("/api/report")
        .add_query_param("date", "1999/12/31")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["grand_total"], 0);
    assert_eq!(json["entries"].as_array().unwrap().len(), 0);
    assert_eq!(json["notices"][0], "no_activity");
}

#[tokio::test]
async fn test_report_malformed_date_rejected() {
    let fx = common::create_fixture();
    let server = fx.server();

    for bad in ["2024-01-02", "20240102", "2024/1/2", "abc"] {
        let response = server.get("/api/report").add_query_param("date", bad).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_report_impossible_date_rejected() {
    let fx = common::create_fixture();
    let server = fx.server();

    let response = server
        .get("/api/report")
        .add_query_param("date", "2023/02/30")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["date"], "2023/02/30");
}

#[tokio::test]
async fn test_report_limit_out_of_range() {
    let fx = common::create_fixture();
    let server = fx.server();

    let response = server
        .get("/api/report")
        .add_query_param("limit", "0")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_board_entry_found() {
    let fx = common::create_fixture();
    fx.write_directory(common::DIRECTORY);
    fx.write_counts(&common::date(2024, 1, 2), common::JSON_COUNTS);
    let server = fx.server();

    let response = server
        .get("/api/report/boards/software")
        .add_query_param("date", "2024/01/02")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total_boards"], 4);
    assert_eq!(json["entry"]["rank"], 3);
    assert_eq!(json["entry"]["server_host"], "egg");
    assert_eq!(json["entry"]["post_count"], 12);
}

#[tokio::test]
async fn test_board_entry_not_found() {
    let fx = common::create_fixture();
    fx.write_counts(&common::date(2024, 1, 2), common::JSON_COUNTS);
    let server = fx.server();

    let response = server
        .get("/api/report/boards/nosuchboard")
        .add_query_param("date", "2024/01/02")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["board_id"], "nosuchboard");
}

#[tokio::test]
async fn test_report_empty_date_means_today() {
    let fx = common::create_fixture();
    let today = ReportDate::today();
    fx.write_counts(&today, "news\t4\n");
    let server = fx.server();

    let response = server.get("/api/report").add_query_param("date", "").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["date"], today.to_string());
    assert_eq!(json["grand_total"], 4);
}
