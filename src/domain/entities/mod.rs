//! Core domain entities for the daily board report.
//!
//! Entities are plain data structures; ordering lives in
//! [`crate::domain::ranking`] and assembly in
//! [`crate::application::services::ReportService`].
//!
//! # Entity Types
//!
//! - [`RawCountRecord`] - Normalized per-board counters from a count file
//! - [`BoardServerEntry`] / [`BoardDirectory`] - Board to server-host mapping
//! - [`RankedEntry`] / [`Report`] - The ranked, enriched output

pub mod board_server;
pub mod count_record;
pub mod report;

pub use board_server::{BoardDirectory, BoardServerEntry};
pub use count_record::RawCountRecord;
pub use report::{RankedEntry, Report, ReportNotice};
