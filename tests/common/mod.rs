#![allow(dead_code)]

use axum_test::TestServer;
use board_report::application::services::ReportSources;
use board_report::domain::report_date::ReportDate;
use board_report::infrastructure::cache::MemoryDirectoryCache;
use board_report::infrastructure::persistence::DirectoryPattern;
use board_report::routes::base_router;
use board_report::state::AppState;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary data layout with a count directory and a directory file path.
pub struct Fixture {
    pub dir: TempDir,
    pub state: AppState,
}

impl Fixture {
    pub fn counts_dir(&self) -> PathBuf {
        self.dir.path().join("scount")
    }

    pub fn directory_path(&self) -> PathBuf {
        self.dir.path().join("ita.data")
    }

    pub fn count_path(&self, date: &ReportDate) -> PathBuf {
        self.counts_dir().join(format!("{}.json", date.file_key()))
    }

    pub fn write_counts(&self, date: &ReportDate, content: &str) {
        std::fs::write(self.count_path(date), content).unwrap();
    }

    pub fn write_directory(&self, content: &str) {
        std::fs::write(self.directory_path(), content).unwrap();
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(base_router(self.state.clone())).unwrap()
    }
}

pub fn create_fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let counts_dir = dir.path().join("scount");
    std::fs::create_dir_all(&counts_dir).unwrap();

    let sources = ReportSources {
        count_data_dir: counts_dir,
        count_file_extension: "json".to_string(),
        directory_path: dir.path().join("ita.data"),
    };
    let state = AppState::new(
        sources,
        DirectoryPattern::any_host(),
        Arc::new(MemoryDirectoryCache::new()),
    );

    Fixture { dir, state }
}

pub fn date(y: i32, m: u32, d: u32) -> ReportDate {
    ReportDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub const DIRECTORY: &str = "\
hayabusa9.2ch.sc/news<>ニュース速報
egg.2ch.sc/software<>ソフトウェア
hayabusa9.2ch.sc/livejupiter<>なんでも実況J
";

pub const JSON_COUNTS: &str = r#"{
    "news": {"Count": 1500, "Thread": 42, "Id": {"a": 3, "b": 1, "c": 9}},
    "livejupiter": {"Count": 1500, "Thread": 80, "Id": {"a": 1, "b": 1, "c": 1}},
    "software": {"Count": 12, "Thread": 1, "Id": {"x": 12}},
    "unlisted": {"Count": 7, "Thread": 0, "Id": null}
}"#;
