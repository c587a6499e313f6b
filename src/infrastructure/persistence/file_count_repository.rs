//! File-backed count repository.
//!
//! A day's count file comes in one of two historical formats:
//!
//! - **Legacy text**: one `board<TAB>posts` pair per line
//! - **JSON**: `{ "board": { "Count": n, "Thread": n, "Id": { "poster": n, ... } } }`
//!
//! The format is sniffed from the content, so both can live side by side
//! under the same naming scheme.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use super::source::{SourceError, read_source};
use crate::domain::entities::RawCountRecord;
use crate::domain::repositories::CountRepository;

/// On-disk layout of a count file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountFormat {
    LegacyText,
    Json,
}

impl CountFormat {
    /// Picks JSON when the first meaningful character opens an object.
    pub fn detect(content: &str) -> Self {
        let body = content.trim_start_matches('\u{FEFF}').trim_start();
        if body.starts_with('{') {
            Self::Json
        } else {
            Self::LegacyText
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LegacyText => "legacy-text",
            Self::Json => "json",
        }
    }
}

/// Per-board aggregate as written by the counting process.
///
/// The writer emits `null` for boards or poster maps it never filled in.
#[derive(Debug, Deserialize)]
struct SavedBoardStats {
    #[serde(rename = "Count", default)]
    count: u64,
    #[serde(rename = "Thread", default)]
    thread: u64,
    #[serde(rename = "Id", default)]
    ids: Option<HashMap<String, IgnoredAny>>,
}

/// Parses count data in either format.
///
/// Malformed text lines are skipped; a malformed JSON document is an error
/// for the caller to degrade. Duplicate boards keep the last occurrence.
pub fn parse_counts(content: &str) -> Result<Vec<RawCountRecord>, serde_json::Error> {
    match CountFormat::detect(content) {
        CountFormat::LegacyText => Ok(parse_legacy(content)),
        CountFormat::Json => parse_json(content),
    }
}

fn parse_legacy(content: &str) -> Vec<RawCountRecord> {
    let mut records: HashMap<String, RawCountRecord> = HashMap::new();

    for line in content.trim_start_matches('\u{FEFF}').lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [board, posts] = fields.as_slice() else {
            continue;
        };
        if board.is_empty() {
            continue;
        }
        let Ok(posts) = posts.trim().parse::<u64>() else {
            continue;
        };

        records.insert(
            (*board).to_string(),
            RawCountRecord::posts_only(*board, posts),
        );
    }

    records.into_values().collect()
}

fn parse_json(content: &str) -> Result<Vec<RawCountRecord>, serde_json::Error> {
    let body = content.trim_start_matches('\u{FEFF}');
    let boards: HashMap<String, Option<SavedBoardStats>> = serde_json::from_str(body)?;

    Ok(boards
        .into_iter()
        .filter(|(board, _)| !board.is_empty())
        .filter_map(|(board, stats)| {
            let stats = stats?;
            let unique_posters = stats.ids.map_or(0, |ids| ids.len() as u64);
            Some(RawCountRecord::new(
                board,
                stats.count,
                unique_posters,
                stats.thread,
            ))
        })
        .collect())
}

/// Reads count files from the local filesystem.
#[derive(Debug, Default, Clone)]
pub struct FileCountRepository;

impl FileCountRepository {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses `path`, reporting why nothing could be loaded.
    ///
    /// Operator tooling uses this to explain an empty report; the
    /// [`CountRepository`] implementation swallows the error.
    pub async fn read_counts(
        &self,
        path: &Path,
    ) -> Result<(CountFormat, Vec<RawCountRecord>), SourceError> {
        let content = read_source(path).await?;
        let format = CountFormat::detect(&content);
        let records = parse_counts(&content).map_err(|source| SourceError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((format, records))
    }
}

#[async_trait]
impl CountRepository for FileCountRepository {
    async fn load_counts(&self, path: &Path) -> Vec<RawCountRecord> {
        match self.read_counts(path).await {
            Ok((format, records)) => {
                debug!(
                    "Loaded {} board records from {} ({})",
                    records.len(),
                    path.display(),
                    format.name()
                );
                records
            }
            Err(e) => {
                e.log("count");
                Vec::new()
            }
        }
    }

    async fn modified_at(&self, path: &Path) -> Option<DateTime<Local>> {
        let metadata = tokio::fs::metadata(path).await.ok()?;
        metadata.modified().ok().map(DateTime::<Local>::from)
    }
}
