//! Handler for a single board's ranking.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use super::report::resolve_query_date;
use crate::api::dto::report::{BoardEntryResponse, RankedEntryItem, ReportQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Returns where one board placed in a day's ranking.
///
/// # Endpoint
///
/// `GET /api/report/boards/{board_id}`
///
/// # Query Parameters
///
/// - `date` (optional): Day to report on, `YYYY/MM/DD` (default: today)
///
/// # Errors
///
/// Returns 400 Bad Request if `date` is malformed.
/// Returns 404 Not Found if the board has no record that day.
pub async fn board_entry_handler(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<BoardEntryResponse>, AppError> {
    let date = resolve_query_date(&params)?;

    let report = state.report_service.report_for(&date).await;

    let entry = report.entry_for(&board_id).cloned().ok_or_else(|| {
        AppError::not_found(
            "Board has no activity for this date",
            json!({ "board_id": board_id, "date": date.to_string() }),
        )
    })?;

    Ok(Json(BoardEntryResponse {
        date: date.to_string(),
        total_boards: report.entries.len(),
        entry: RankedEntryItem::from(entry),
    }))
}
