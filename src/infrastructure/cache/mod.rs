//! Caching layer for parsed board directories.
//!
//! Provides a [`DirectoryCache`] trait with two implementations:
//! - [`MemoryDirectoryCache`] - In-process cache invalidated by file mtime
//! - [`NullDirectoryCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryDirectoryCache;
pub use null_cache::NullDirectoryCache;
pub use service::DirectoryCache;
