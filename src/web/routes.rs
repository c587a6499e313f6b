//! Report page route configuration.

use crate::state::AppState;
use crate::web::handlers::report_page_handler;
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET /` - Ranked report page, `?date=YYYY/MM/DD` optional
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(report_page_handler))
}
