//! Repository trait for the board to server directory.

use crate::domain::entities::BoardDirectory;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Source of the board to server-host mapping.
///
/// A missing directory file is not an error: implementations return an
/// empty directory and every board shows an unknown server.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileDirectoryRepository`] -
///   Parses the line-oriented directory file, optionally cached by mtime
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Loads the directory stored at `path`.
    async fn load_directory(&self, path: &Path) -> Arc<BoardDirectory>;
}
