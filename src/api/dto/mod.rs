//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and validator for query
//! validation.

pub mod health;
pub mod report;
