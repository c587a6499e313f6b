//! Report date selection and the file key derived from it.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::path::{Path, PathBuf};

/// Calendar day a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    /// Accepted input and display format.
    pub const FORMAT: &'static str = "%Y/%m/%d";
    const FILE_KEY_FORMAT: &'static str = "%Y_%m_%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today in the server's local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a strict, zero-padded `YYYY/MM/DD` date.
    ///
    /// Returns `None` for anything else, including impossible dates.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let bytes = input.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'/',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return None;
        }
        NaiveDate::parse_from_str(input, Self::FORMAT).ok().map(Self)
    }

    /// File name stem for this day, e.g. `2024_03_09`.
    pub fn file_key(&self) -> String {
        self.0.format(Self::FILE_KEY_FORMAT).to_string()
    }

    /// Count file path inside `data_dir` using `extension`.
    pub fn count_file_path(&self, data_dir: &Path, extension: &str) -> PathBuf {
        data_dir.join(format!("{}.{}", self.file_key(), extension))
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Classification of a raw `date` query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    Today,
    Specific(ReportDate),
    Invalid(String),
}

impl DateSelection {
    /// A missing or blank value selects today.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Today,
            Some(value) => match ReportDate::parse(value) {
                Some(date) => Self::Specific(date),
                None => Self::Invalid(value.to_string()),
            },
        }
    }

    /// Resolves to a concrete day, falling back to `today` when invalid.
    pub fn resolve(&self, today: ReportDate) -> ReportDate {
        match self {
            Self::Specific(date) => *date,
            Self::Today | Self::Invalid(_) => today,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> ReportDate {
        ReportDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(ReportDate::parse("2024/03/09"), Some(date(2024, 3, 9)));
        assert_eq!(ReportDate::parse(" 2024/03/09 "), Some(date(2024, 3, 9)));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(ReportDate::parse("2024-03-09").is_none());
        assert!(ReportDate::parse("2024/3/9").is_none());
        assert!(ReportDate::parse("2024/ 1/09").is_none());
        assert!(ReportDate::parse("+024/01/09").is_none());
        assert!(ReportDate::parse("2024/01/0a").is_none());
        assert!(ReportDate::parse("2024/02/30").is_none());
        assert!(ReportDate::parse("yesterday").is_none());
        assert!(ReportDate::parse("").is_none());
    }

    #[test]
    fn test_file_key_and_display() {
        let d = date(2024, 3, 9);

        assert_eq!(d.file_key(), "2024_03_09");
        assert_eq!(d.to_string(), "2024/03/09");
    }

    #[test]
    fn test_count_file_path() {
        let path = date(2023, 12, 31).count_file_path(Path::new("/data/scount"), "json");

        assert_eq!(path, PathBuf::from("/data/scount/2023_12_31.json"));
    }

    #[test]
    fn test_selection_from_param() {
        assert_eq!(DateSelection::from_param(None), DateSelection::Today);
        assert_eq!(DateSelection::from_param(Some("  ")), DateSelection::Today);
        assert_eq!(
            DateSelection::from_param(Some("2024/01/02")),
            DateSelection::Specific(date(2024, 1, 2))
        );
        assert_eq!(
            DateSelection::from_param(Some("01/02/2024")),
            DateSelection::Invalid("01/02/2024".to_string())
        );
    }

    #[test]
    fn test_invalid_selection_falls_back_to_today() {
        let today = date(2025, 6, 1);
        let invalid = DateSelection::from_param(Some("nope"));

        assert!(invalid.is_invalid());
        assert_eq!(invalid.resolve(today), today);
        assert_eq!(DateSelection::Today.resolve(today), today);
        assert_eq!(
            DateSelection::Specific(date(2024, 1, 2)).resolve(today),
            date(2024, 1, 2)
        );
    }
}
