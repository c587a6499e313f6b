//! Handler for the JSON report.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::report::{ReportQuery, ReportResponse};
use crate::domain::report_date::{DateSelection, ReportDate};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the ranked board report for one day.
///
/// # Endpoint
///
/// `GET /api/report`
///
/// # Query Parameters
///
/// - `date` (optional): Day to report on, `YYYY/MM/DD` (default: today)
/// - `limit` (optional): Maximum number of entries (1-10000)
///
/// # Response
///
/// ```json
/// {
///   "date": "2024/01/02",
///   "grand_total": 1520,
///   "grand_total_display": "1,520",
///   "notices": [],
///   "entries": [
///     {
///       "rank": 1,
///       "board_id": "news",
///       "server_host": "hayabusa9",
///       "post_count": 1500,
///       "unique_poster_count": 310,
///       "new_thread_count": 42
///     }
///   ]
/// }
/// ```
///
/// A day without data is not an error: `entries` is empty and `notices`
/// contains `"no_activity"`.
///
/// # Errors
///
/// Returns 400 Bad Request if `date` or `limit` is malformed.
pub async fn report_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let date = resolve_query_date(&params)?;

    let report = state.report_service.report_for(&date).await;

    Ok(Json(ReportResponse::from_report(
        &date,
        report,
        params.limit,
    )))
}

/// Validates the query and resolves the requested day.
///
/// Unlike the HTML page, the API rejects a malformed date instead of
/// falling back to today.
pub(crate) fn resolve_query_date(params: &ReportQuery) -> Result<ReportDate, AppError> {
    params
        .validate()
        .map_err(|e| AppError::bad_request("Invalid query parameters", json!(e)))?;

    match DateSelection::from_param(params.date.as_deref()) {
        DateSelection::Today => Ok(ReportDate::today()),
        DateSelection::Specific(date) => Ok(date),
        DateSelection::Invalid(raw) => Err(AppError::bad_request(
            "Date does not exist",
            json!({ "date": raw }),
        )),
    }
}
