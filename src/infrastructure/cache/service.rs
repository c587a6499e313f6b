//! Directory cache trait.

use crate::domain::entities::BoardDirectory;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

/// Trait for caching parsed board directories between requests.
///
/// Entries are keyed by file path and the file's modification time. A
/// lookup with a different modification time must miss, so a cached
/// mapping never outlives the directory file it was parsed from.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryDirectoryCache`] - In-process cache
/// - [`crate::infrastructure::cache::NullDirectoryCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait DirectoryCache: Send + Sync {
    /// Returns the cached directory for `path` if it was parsed from the
    /// file version last modified at `modified`.
    async fn get(&self, path: &Path, modified: SystemTime) -> Option<Arc<BoardDirectory>>;

    /// Stores a freshly parsed directory, replacing any older version.
    async fn put(&self, path: &Path, modified: SystemTime, directory: Arc<BoardDirectory>);

    /// Drops whatever is cached for `path`.
    ///
    /// Called when the file disappears or cannot be read.
    async fn invalidate(&self, path: &Path);

    /// Number of directory files currently cached.
    async fn cached_files(&self) -> usize;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
