//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer
//! on top of the filesystem.
//!
//! # Modules
//!
//! - [`cache`] - Directory caching (in-memory and no-op implementations)
//! - [`persistence`] - File-backed count and directory repositories

pub mod cache;
pub mod persistence;
