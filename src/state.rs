//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ReportService, ReportSources};
use crate::infrastructure::cache::DirectoryCache;
use crate::infrastructure::persistence::{
    DirectoryPattern, FileCountRepository, FileDirectoryRepository,
};

/// Report service wired to the filesystem repositories.
pub type FileReportService = ReportService<FileCountRepository, FileDirectoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<FileReportService>,
    pub cache: Arc<dyn DirectoryCache>,
}

impl AppState {
    /// Builds the state from input locations, the directory line pattern
    /// and a directory cache.
    pub fn new(
        sources: ReportSources,
        pattern: DirectoryPattern,
        cache: Arc<dyn DirectoryCache>,
    ) -> Self {
        let counts = Arc::new(FileCountRepository::new());
        let directory = Arc::new(FileDirectoryRepository::new(pattern, cache.clone()));
        let report_service = Arc::new(ReportService::new(counts, directory, sources));

        Self {
            report_service,
            cache,
        }
    }
}
