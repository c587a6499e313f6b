//! No-op directory cache for disabled caching.

use super::service::DirectoryCache;
use crate::domain::entities::BoardDirectory;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Every request re-reads and re-parses the directory file, which is what
/// the report did before caching existed.
pub struct NullDirectoryCache;

impl NullDirectoryCache {
    /// Creates a new NullDirectoryCache instance.
    pub fn new() -> Self {
        debug!("Using NullDirectoryCache (caching disabled)");
        Self
    }
}

impl Default for NullDirectoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryCache for NullDirectoryCache {
    async fn get(&self, _path: &Path, _modified: SystemTime) -> Option<Arc<BoardDirectory>> {
        None
    }

    async fn put(&self, _path: &Path, _modified: SystemTime, _directory: Arc<BoardDirectory>) {}

    async fn invalidate(&self, _path: &Path) {}

    async fn cached_files(&self) -> usize {
        0
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullDirectoryCache::new();
        let path = Path::new("/tmp/ita.data");
        let now = SystemTime::now();

        cache.put(path, now, Arc::new(BoardDirectory::empty())).await;

        assert!(cache.get(path, now).await.is_none());
        assert_eq!(cache.cached_files().await, 0);
        assert_eq!(cache.backend(), "disabled");
    }
}
