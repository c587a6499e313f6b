//! View model for the HTML report page.

use chrono::{DateTime, Local};

use crate::domain::entities::{RankedEntry, Report};
use crate::domain::report_date::{DateSelection, ReportDate};
use crate::utils::number_format::format_thousands;

/// Visual emphasis bands for the top of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Top5,
    Top10,
    Top20,
    Rest,
}

impl RankTier {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0..=5 => Self::Top5,
            6..=10 => Self::Top10,
            11..=20 => Self::Top20,
            _ => Self::Rest,
        }
    }

    /// CSS class applied to the emphasised cells, empty for [`RankTier::Rest`].
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Top5 => "top5",
            Self::Top10 => "top10",
            Self::Top20 => "top20",
            Self::Rest => "",
        }
    }
}

/// One pre-formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub rank: usize,
    pub board_id: String,
    pub posts: String,
    pub unique_posters: String,
    pub new_threads: String,
    pub server_host: String,
    pub tier_class: &'static str,
}

impl From<RankedEntry> for ReportRow {
    fn from(entry: RankedEntry) -> Self {
        Self {
            rank: entry.rank,
            posts: format_thousands(entry.post_count),
            unique_posters: format_thousands(entry.unique_poster_count),
            new_threads: format_thousands(entry.new_thread_count),
            tier_class: RankTier::for_rank(entry.rank).css_class(),
            board_id: entry.board_id,
            server_host: entry.server_host,
        }
    }
}

/// Everything the page header shows besides the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    /// "Today" or the selected date.
    pub day_label: String,
    /// Date the data belongs to, or `-` when unknown.
    pub data_date: String,
    /// Time the data was last written, or `-`.
    pub data_time: String,
}

impl PageHeader {
    /// Today's header reflects when the count file was last written.
    pub fn for_selection(
        selection: &DateSelection,
        modified: Option<DateTime<Local>>,
    ) -> Self {
        match selection {
            DateSelection::Specific(date) => Self::for_date(date),
            DateSelection::Today | DateSelection::Invalid(_) => match modified {
                Some(modified) => Self {
                    day_label: "Today".to_string(),
                    data_date: modified.format(ReportDate::FORMAT).to_string(),
                    data_time: modified.format("%H:%M:%S").to_string(),
                },
                None => Self {
                    day_label: "Today".to_string(),
                    data_date: "-".to_string(),
                    data_time: "-".to_string(),
                },
            },
        }
    }

    fn for_date(date: &ReportDate) -> Self {
        Self {
            day_label: date.to_string(),
            data_date: date.to_string(),
            data_time: "-".to_string(),
        }
    }
}

/// Rows, formatted total and notice texts for a report.
pub fn rows_and_total(report: Report) -> (Vec<ReportRow>, String, Vec<&'static str>) {
    let total = format_thousands(report.grand_total);
    let notices = report.notices.iter().map(|n| n.message()).collect();
    let rows = report.entries.into_iter().map(ReportRow::from).collect();
    (rows, total, notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RawCountRecord;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RankTier::for_rank(1), RankTier::Top5);
        assert_eq!(RankTier::for_rank(5), RankTier::Top5);
        assert_eq!(RankTier::for_rank(6), RankTier::Top10);
        assert_eq!(RankTier::for_rank(10), RankTier::Top10);
        assert_eq!(RankTier::for_rank(11), RankTier::Top20);
        assert_eq!(RankTier::for_rank(20), RankTier::Top20);
        assert_eq!(RankTier::for_rank(21), RankTier::Rest);
        assert_eq!(RankTier::Rest.css_class(), "");
    }

    #[test]
    fn test_row_formats_counts() {
        let entry = RankedEntry::new(12, RawCountRecord::new("news", 12345, 1000, 7), "hayabusa9");
        let row = ReportRow::from(entry);

        assert_eq!(row.posts, "12,345");
        assert_eq!(row.unique_posters, "1,000");
        assert_eq!(row.new_threads, "7");
        assert_eq!(row.tier_class, "top20");
        assert_eq!(row.server_host, "hayabusa9");
    }

    #[test]
    fn test_header_for_specific_date() {
        let date = ReportDate::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let header = PageHeader::for_selection(&DateSelection::Specific(date), None);

        assert_eq!(header.day_label, "2024/01/02");
        assert_eq!(header.data_date, "2024/01/02");
        assert_eq!(header.data_time, "-");
    }

    #[test]
    fn test_header_for_today_uses_mtime() {
        let modified = Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let header = PageHeader::for_selection(&DateSelection::Today, Some(modified));

        assert_eq!(header.day_label, "Today");
        assert_eq!(header.data_date, "2024/05/06");
        assert_eq!(header.data_time, "07:08:09");
    }

    #[test]
    fn test_header_for_today_without_file() {
        let header =
            PageHeader::for_selection(&DateSelection::Invalid("x".to_string()), None);

        assert_eq!(header.data_date, "-");
        assert_eq!(header.data_time, "-");
    }

    #[test]
    fn test_rows_and_total() {
        let report = Report::from_entries(vec![RankedEntry::new(
            1,
            RawCountRecord::posts_only("a", 1000),
            "",
        )]);

        let (rows, total, notices) = rows_and_total(report);

        assert_eq!(rows.len(), 1);
        assert_eq!(total, "1,000");
        assert!(notices.is_empty());
    }
}
