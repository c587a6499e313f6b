//! File-backed board directory repository.
//!
//! The directory file lists one board per line. Only lines shaped like
//! `<server>.<domain>/<board><>` contribute a mapping; everything else
//! (headers, category names, trailing titles) is ignored.
//!
//! The server label depends on the pattern. [`DirectoryPattern::any_host`]
//! keeps only the host's first label, so `a.b.2ch.sc/news<>` maps `news` to
//! `a`. A suffix pattern keeps everything before the suffix, so
//! `BOARD_HOST_SUFFIX=2ch.sc` maps the same line to `a.b`.

use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::source::read_source;
use crate::domain::entities::{BoardDirectory, BoardServerEntry};
use crate::domain::repositories::DirectoryRepository;
use crate::infrastructure::cache::DirectoryCache;

/// Server label, any domain, board id, `<>` sentinel.
static ANY_HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^/.\s]+)\.[^/\s]+/([^/<\s]+)/?<>").unwrap());

/// Line pattern recognised in the directory file.
#[derive(Debug, Clone)]
pub struct DirectoryPattern {
    regex: Regex,
}

impl DirectoryPattern {
    /// Matches any host; the server label is the host's first component.
    pub fn any_host() -> Self {
        Self {
            regex: ANY_HOST_REGEX.clone(),
        }
    }

    /// Matches only hosts under `suffix` (e.g. `2ch.sc`); the server label
    /// is everything before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting expression exceeds regex limits.
    pub fn for_suffix(suffix: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"([^/\s]+)\.{}/([^/<\s]+)/?<>",
            regex::escape(suffix.trim_matches('.'))
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Extracts the board mapping from one line, if it has one.
    pub fn parse_line(&self, line: &str) -> Option<BoardServerEntry> {
        let caps = self.regex.captures(line)?;
        Some(BoardServerEntry::new(&caps[2], &caps[1]))
    }
}

impl Default for DirectoryPattern {
    fn default() -> Self {
        Self::any_host()
    }
}

/// Parses a whole directory file; non-matching lines are skipped.
pub fn parse_directory(content: &str, pattern: &DirectoryPattern) -> BoardDirectory {
    content
        .lines()
        .filter_map(|line| pattern.parse_line(line))
        .collect()
}

/// Loads the board directory from disk through a [`DirectoryCache`].
pub struct FileDirectoryRepository {
    pattern: DirectoryPattern,
    cache: Arc<dyn DirectoryCache>,
}

impl FileDirectoryRepository {
    pub fn new(pattern: DirectoryPattern, cache: Arc<dyn DirectoryCache>) -> Self {
        Self { pattern, cache }
    }
}

#[async_trait]
impl DirectoryRepository for FileDirectoryRepository {
    async fn load_directory(&self, path: &Path) -> Arc<BoardDirectory> {
        let modified = tokio::fs::metadata(path)
            .await
            .and_then(|metadata| metadata.modified())
            .ok();

        if let Some(modified) = modified
            && let Some(directory) = self.cache.get(path, modified).await
        {
            return directory;
        }

        let content = match read_source(path).await {
            Ok(content) => content,
            Err(e) => {
                e.log("board directory");
                self.cache.invalidate(path).await;
                return Arc::new(BoardDirectory::empty());
            }
        };

        let directory = Arc::new(parse_directory(&content, &self.pattern));
        debug!(
            "Parsed {} board mappings from {}",
            directory.len(),
            path.display()
        );

        match modified {
            Some(modified) => self.cache.put(path, modified, directory.clone()).await,
            None => self.cache.invalidate(path).await,
        }

        directory
    }
}
