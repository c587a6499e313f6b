//! Daily board ranking assembly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::entities::{BoardDirectory, RankedEntry, RawCountRecord, Report};
use crate::domain::ranking::rank;
use crate::domain::report_date::ReportDate;
use crate::domain::repositories::{CountRepository, DirectoryRepository};

/// Where the report's input files live.
#[derive(Debug, Clone)]
pub struct ReportSources {
    /// Directory holding one count file per day.
    pub count_data_dir: PathBuf,
    /// Extension of the daily count files, without the dot.
    pub count_file_extension: String,
    /// Board to server directory file.
    pub directory_path: PathBuf,
}

impl ReportSources {
    /// Count file path for `date`.
    pub fn count_path(&self, date: &ReportDate) -> PathBuf {
        date.count_file_path(&self.count_data_dir, &self.count_file_extension)
    }
}

/// Service turning a day's count file into a ranked, server-enriched report.
///
/// Holds no mutable state: each call reads the inputs afresh (directory
/// caching is the repository's concern), so concurrent requests are
/// independent and repeated calls on unchanged files return equal reports.
pub struct ReportService<C: CountRepository, D: DirectoryRepository> {
    counts: Arc<C>,
    directory: Arc<D>,
    sources: ReportSources,
}

impl<C: CountRepository, D: DirectoryRepository> ReportService<C, D> {
    /// Creates a new report service.
    pub fn new(counts: Arc<C>, directory: Arc<D>, sources: ReportSources) -> Self {
        Self {
            counts,
            directory,
            sources,
        }
    }

    pub fn sources(&self) -> &ReportSources {
        &self.sources
    }

    /// Assembles the report for an explicit count file.
    ///
    /// `counts_path = None` means no file could be selected; the result is
    /// the empty report carrying the no-activity notice. Missing or
    /// malformed files behave the same way and never produce an error.
    pub async fn assemble(&self, counts_path: Option<&Path>, directory_path: &Path) -> Report {
        let Some(counts_path) = counts_path else {
            return Report::empty();
        };

        let records = self.counts.load_counts(counts_path).await;
        if records.is_empty() {
            debug!("No count records in {}", counts_path.display());
            return Report::empty();
        }

        let directory = self.directory.load_directory(directory_path).await;
        let report = Report::from_entries(enrich(rank(records), &directory));

        debug!(
            "Assembled report from {}: {} boards, {} posts",
            counts_path.display(),
            report.entries.len(),
            report.grand_total
        );

        report
    }

    /// Assembles the report for `date` using the configured sources.
    pub async fn report_for(&self, date: &ReportDate) -> Report {
        let counts_path = self.sources.count_path(date);
        self.assemble(Some(&counts_path), &self.sources.directory_path)
            .await
    }

    /// When the count file for `date` was last written, if it exists.
    pub async fn snapshot_modified(&self, date: &ReportDate) -> Option<DateTime<Local>> {
        self.counts
            .modified_at(&self.sources.count_path(date))
            .await
    }

    /// The configured board directory.
    pub async fn directory(&self) -> Arc<BoardDirectory> {
        self.directory
            .load_directory(&self.sources.directory_path)
            .await
    }
}

fn enrich(ranked: Vec<RawCountRecord>, directory: &BoardDirectory) -> Vec<RankedEntry> {
    ranked
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let server = directory.server_for(&record.board_id).to_string();
            RankedEntry::new(i + 1, record, server)
        })
        .collect()
}
