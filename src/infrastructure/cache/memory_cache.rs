//! In-process directory cache keyed by path and modification time.

use super::service::DirectoryCache;
use crate::domain::entities::BoardDirectory;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;
use tracing::debug;

struct CachedDirectory {
    modified: SystemTime,
    directory: Arc<BoardDirectory>,
}

/// Keeps the most recently parsed directory per file path.
///
/// Readers share the parsed mapping through an `Arc`; a newer modification
/// time on disk turns the next lookup into a miss.
#[derive(Default)]
pub struct MemoryDirectoryCache {
    entries: RwLock<HashMap<PathBuf, CachedDirectory>>,
}

impl MemoryDirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DirectoryCache for MemoryDirectoryCache {
    async fn get(&self, path: &Path, modified: SystemTime) -> Option<Arc<BoardDirectory>> {
        let entries = self.entries.read().await;
        match entries.get(path) {
            Some(cached) if cached.modified == modified => {
                debug!("Directory cache HIT: {}", path.display());
                Some(cached.directory.clone())
            }
            Some(_) => {
                debug!("Directory cache STALE: {}", path.display());
                None
            }
            None => {
                debug!("Directory cache MISS: {}", path.display());
                None
            }
        }
    }

    async fn put(&self, path: &Path, modified: SystemTime, directory: Arc<BoardDirectory>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            path.to_path_buf(),
            CachedDirectory {
                modified,
                directory,
            },
        );
    }

    async fn invalidate(&self, path: &Path) {
        if self.entries.write().await.remove(path).is_some() {
            debug!("Directory cache INVALIDATE: {}", path.display());
        }
    }

    async fn cached_files(&self) -> usize {
        self.entries.read().await.len()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BoardServerEntry;
    use std::time::Duration;

    fn directory() -> Arc<BoardDirectory> {
        Arc::new(
            vec![BoardServerEntry::new("news", "hayabusa9")]
                .into_iter()
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_hit_with_same_mtime() {
        let cache = MemoryDirectoryCache::new();
        let path = Path::new("/data/ita.data");
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        cache.put(path, modified, directory()).await;
        let hit = cache.get(path, modified).await;

        assert_eq!(hit.unwrap().server_for("news"), "hayabusa9");
        assert_eq!(cache.cached_files().await, 1);
    }

    #[tokio::test]
    async fn test_miss_when_mtime_changes() {
        let cache = MemoryDirectoryCache::new();
        let path = Path::new("/data/ita.data");
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(100);

        cache.put(path, modified, directory()).await;

        assert!(
            cache
                .get(path, modified + Duration::from_secs(1))
                .await
                .is_none()
        );
        assert!(cache.get(Path::new("/other"), modified).await.is_none());
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let cache = MemoryDirectoryCache::new();
        let path = Path::new("/data/ita.data");
        let modified = SystemTime::UNIX_EPOCH;

        cache.put(path, modified, directory()).await;
        cache.invalidate(path).await;

        assert!(cache.get(path, modified).await.is_none());
        assert_eq!(cache.cached_files().await, 0);
        assert_eq!(cache.backend(), "memory");
    }
}
