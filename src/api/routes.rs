//! API route configuration.

use crate::api::handlers::{board_entry_handler, report_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON report routes, public and read-only.
///
/// # Endpoints
///
/// - `GET /report`                   - Ranked report for a day
/// - `GET /report/boards/{board_id}` - One board's position in that ranking
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report", get(report_handler))
        .route("/report/boards/{board_id}", get(board_entry_handler))
}
