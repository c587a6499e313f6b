//! Repository trait definitions for the domain layer.
//!
//! The report reads two external, read-only files. These traits hide how
//! they are located and parsed so the assembly pipeline can be exercised
//! with mocks.
//!
//! # Available Repositories
//!
//! - [`CountRepository`] - One day's per-board counters
//! - [`DirectoryRepository`] - Board to server-host mapping
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.

pub mod count_repository;
pub mod directory_repository;

pub use count_repository::CountRepository;
pub use directory_repository::DirectoryRepository;

#[cfg(test)]
pub use count_repository::MockCountRepository;
#[cfg(test)]
pub use directory_repository::MockDirectoryRepository;
