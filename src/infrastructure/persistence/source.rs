//! Reading the external input files and classifying their failures.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reasons an input file contributes no data.
///
/// None of these reach the caller of a repository; they are logged and
/// the file is treated as empty.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{0} does not exist")]
    Missing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed count document {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Logs the failure at a level matching how unusual it is.
    ///
    /// A missing file is the normal "nothing written yet" state.
    pub fn log(&self, kind: &str) {
        match self {
            Self::Missing(_) => debug!("No {} file: {}", kind, self),
            Self::Read { .. } | Self::Decode { .. } => warn!("Ignoring {} file: {}", kind, self),
        }
    }
}

/// Reads a whole input file, replacing invalid UTF-8 sequences.
pub async fn read_source(path: &Path) -> Result<String, SourceError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(SourceError::Missing(path.to_path_buf()))
        }
        Err(source) => Err(SourceError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
