//! Report page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Local;
use serde::Deserialize;

use crate::domain::entities::ReportNotice;
use crate::domain::report_date::{DateSelection, ReportDate};
use crate::state::AppState;
use crate::web::view::{PageHeader, ReportRow, rows_and_total};

/// Query parameters for the report page.
#[derive(Debug, Default, Deserialize)]
pub struct ReportPageParams {
    pub date: Option<String>,
}

/// Template for the ranked report page.
///
/// Renders `templates/report.html` with:
/// - Version banner and today's date
/// - Grand total and data timestamp
/// - Notices (malformed date, no activity)
/// - The ranking table
#[derive(Template, WebTemplate)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub version: &'static str,
    pub now_date: String,
    pub header: PageHeader,
    pub grand_total: String,
    pub notices: Vec<&'static str>,
    pub rows: Vec<ReportRow>,
}

/// Renders the ranked report page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Query Parameters
///
/// - `date` (optional): `YYYY/MM/DD`; a malformed value shows a notice and
///   falls back to today's report
///
/// The page always renders with 200 OK, even without any data.
pub async fn report_page_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportPageParams>,
) -> impl IntoResponse {
    let now = Local::now();
    let today = ReportDate::new(now.date_naive());
    let selection = DateSelection::from_param(params.date.as_deref());
    let date = selection.resolve(today);

    let modified = match &selection {
        DateSelection::Specific(_) => None,
        DateSelection::Today | DateSelection::Invalid(_) => {
            state.report_service.snapshot_modified(&date).await
        }
    };

    let mut report = state.report_service.report_for(&date).await;
    if selection.is_invalid() {
        tracing::debug!("Malformed report date {:?}, showing today", params.date);
        report.prepend_notice(ReportNotice::InvalidDate);
    }

    let (rows, grand_total, notices) = rows_and_total(report);

    ReportTemplate {
        version: env!("CARGO_PKG_VERSION"),
        now_date: today.to_string(),
        header: PageHeader::for_selection(&selection, modified),
        grand_total,
        notices,
        rows,
    }
}
