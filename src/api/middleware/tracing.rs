//! Request tracing for the report routes.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, info_span};

type MakeReportSpan = fn(&Request<Body>) -> Span;

/// Trace layer type applied by [`layer`].
pub type ReportTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeReportSpan,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates the request tracing layer.
///
/// Each request gets an `INFO` span carrying the method, the path and the
/// raw query, so the requested report date shows up in every log line of
/// that request. Responses are logged with status and latency in ms:
///
/// ```text
/// INFO request{method=GET path=/api/report query=date=2024/01/02}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> ReportTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeReportSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = request.uri().path(),
        query = request.uri().query().unwrap_or(""),
    )
}

