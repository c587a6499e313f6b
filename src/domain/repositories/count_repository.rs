//! Repository trait for daily count data.

use crate::domain::entities::RawCountRecord;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::path::Path;

/// Source of one day's per-board counters.
///
/// Implementations never fail: a missing, unreadable or malformed file
/// yields an empty record set so the report can always be rendered.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileCountRepository`] - Reads
///   legacy tab-separated or JSON count files
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountRepository: Send + Sync {
    /// Loads every board record stored at `path`.
    ///
    /// Output order is unspecified; ranking imposes the only order that matters.
    async fn load_counts(&self, path: &Path) -> Vec<RawCountRecord>;

    /// Returns when the count file was last written, if it exists.
    async fn modified_at(&self, path: &Path) -> Option<DateTime<Local>>;
}
