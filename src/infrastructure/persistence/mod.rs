//! Filesystem repository implementations.
//!
//! Both input files are written by an external process and only ever read
//! here. Every read failure degrades to empty input.
//!
//! # Repositories
//!
//! - [`FileCountRepository`] - Daily count files (legacy text or JSON)
//! - [`FileDirectoryRepository`] - Board to server directory file

pub mod file_count_repository;
pub mod file_directory_repository;
pub mod source;

pub use file_count_repository::{CountFormat, FileCountRepository, parse_counts};
pub use file_directory_repository::{DirectoryPattern, FileDirectoryRepository, parse_directory};
pub use source::SourceError;
