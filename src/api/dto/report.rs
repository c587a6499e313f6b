//! DTOs for the ranked report endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{RankedEntry, Report};
use crate::domain::report_date::ReportDate;
use crate::utils::number_format::format_thousands;

/// Compiled regex for `YYYY/MM/DD` query dates; empty means today.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}/\d{2}/\d{2})?$").unwrap());

/// Query parameters accepted by the report endpoints.
///
/// Uses `serde_with` to parse `limit` from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReportQuery {
    /// Day to report on; today when absent or empty.
    #[validate(regex(path = *DATE_REGEX, message = "Date must be formatted as YYYY/MM/DD"))]
    pub date: Option<String>,

    /// Maximum number of entries to return.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 10000))]
    pub limit: Option<usize>,
}

/// Ranked report for one day.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub date: String,
    pub grand_total: u64,
    pub grand_total_display: String,
    pub notices: Vec<&'static str>,
    pub entries: Vec<RankedEntryItem>,
}

impl ReportResponse {
    /// Builds the response, keeping at most `limit` entries.
    ///
    /// The grand total always covers every board.
    pub fn from_report(date: &ReportDate, report: Report, limit: Option<usize>) -> Self {
        let limit = limit.unwrap_or(usize::MAX);
        Self {
            date: date.to_string(),
            grand_total: report.grand_total,
            grand_total_display: format_thousands(report.grand_total),
            notices: report.notices.iter().map(|n| n.code()).collect(),
            entries: report
                .entries
                .into_iter()
                .take(limit)
                .map(RankedEntryItem::from)
                .collect(),
        }
    }
}

/// One board's position in the ranking.
#[derive(Debug, Serialize)]
pub struct RankedEntryItem {
    pub rank: usize,
    pub board_id: String,
    pub server_host: String,
    pub post_count: u64,
    pub unique_poster_count: u64,
    pub new_thread_count: u64,
}

impl From<RankedEntry> for RankedEntryItem {
    fn from(entry: RankedEntry) -> Self {
        Self {
            rank: entry.rank,
            board_id: entry.board_id,
            server_host: entry.server_host,
            post_count: entry.post_count,
            unique_poster_count: entry.unique_poster_count,
            new_thread_count: entry.new_thread_count,
        }
    }
}

/// A single board looked up in a day's ranking.
#[derive(Debug, Serialize)]
pub struct BoardEntryResponse {
    pub date: String,
    pub total_boards: usize,
    pub entry: RankedEntryItem,
}
