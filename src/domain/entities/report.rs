//! Ranked report entries and the assembled daily report.

use super::RawCountRecord;

/// A count record joined with its server host and placed at a 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub board_id: String,
    pub server_host: String,
    pub post_count: u64,
    pub unique_poster_count: u64,
    pub new_thread_count: u64,
}

impl RankedEntry {
    pub fn new(rank: usize, record: RawCountRecord, server_host: impl Into<String>) -> Self {
        Self {
            rank,
            board_id: record.board_id,
            server_host: server_host.into(),
            post_count: record.post_count,
            unique_poster_count: record.unique_poster_count,
            new_thread_count: record.new_thread_count,
        }
    }
}

/// Conditions the presentation layer must surface to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportNotice {
    /// The requested date could not be parsed.
    InvalidDate,
    /// No posts were recorded for the selected day.
    NoActivity,
}

impl ReportNotice {
    /// Stable machine-readable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDate => "invalid_date",
            Self::NoActivity => "no_activity",
        }
    }

    /// Human-readable text shown on the report page.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidDate => "The date looks malformed (expected YYYY/MM/DD).",
            Self::NoActivity => "No posts recorded for this day.",
        }
    }
}

/// One day's ranking plus the grand total of posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<RankedEntry>,
    pub grand_total: u64,
    pub notices: Vec<ReportNotice>,
}

impl Report {
    /// Builds a report from ranked entries, flagging a day without activity.
    ///
    /// The grand total saturates at `u64::MAX` instead of overflowing.
    pub fn from_entries(entries: Vec<RankedEntry>) -> Self {
        let grand_total = entries
            .iter()
            .fold(0u64, |total, entry| total.saturating_add(entry.post_count));
        let mut report = Self {
            entries,
            grand_total,
            notices: Vec::new(),
        };
        if grand_total == 0 {
            report.add_notice(ReportNotice::NoActivity);
        }
        report
    }

    /// The report for a day with no readable data.
    pub fn empty() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Adds a notice once; notices keep insertion order.
    pub fn add_notice(&mut self, notice: ReportNotice) {
        if !self.notices.contains(&notice) {
            self.notices.push(notice);
        }
    }

    /// Adds a notice once, ahead of the existing ones.
    pub fn prepend_notice(&mut self, notice: ReportNotice) {
        if !self.notices.contains(&notice) {
            self.notices.insert(0, notice);
        }
    }

    pub fn entry_for(&self, board_id: &str) -> Option<&RankedEntry> {
        self.entries.iter().find(|entry| entry.board_id == board_id)
    }
}
