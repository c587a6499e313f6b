//! Domain layer containing the report entities and ranking rules.
//!
//! Nothing here touches the filesystem or HTTP. Repository traits define
//! the contracts implemented by [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Count records, directory mapping and report types
//! - [`ranking`] - Multi-key activity comparator
//! - [`report_date`] - Date selection and count-file keys
//! - [`repositories`] - Data access trait definitions
//!
//! # Report Flow
//!
//! 1. A date selection resolves to a count-file path
//! 2. [`repositories::CountRepository`] loads the raw records
//! 3. [`ranking::rank`] orders them
//! 4. [`repositories::DirectoryRepository`] supplies each board's server
//! 5. [`entities::Report`] carries the ranked entries and grand total

pub mod entities;
pub mod ranking;
pub mod report_date;
pub mod repositories;
