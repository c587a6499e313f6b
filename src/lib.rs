//! # Board Report
//!
//! A small read-only reporting service: it ranks one day's forum boards by
//! post volume and serves the ranking as an HTML page and a JSON API.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a clean-architecture web
//! service:
//!
//! - **Domain Layer** ([`domain`]) - Count records, ranking rules, repository traits
//! - **Application Layer** ([`application`]) - Report assembly
//! - **Infrastructure Layer** ([`infrastructure`]) - Count/directory file parsing and caching
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML report page
//!
//! ## Inputs
//!
//! - A daily count file, `YYYY_MM_DD.<ext>`, either legacy `board<TAB>posts`
//!   lines or a JSON map of per-board aggregates
//! - A board directory file whose `<server>.<domain>/<board><>` lines give
//!   each board's server
//!
//! Both files are produced by other processes. Missing or malformed input
//! never fails a request; the report simply shows no data.
//!
//! ## Quick Start
//!
//! ```bash
//! export COUNT_DATA_DIR="/2ch_sc/scount.json"
//! export BOARD_DIRECTORY_PATH="/2ch_sc/dat/ita.data"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ReportService, ReportSources};
    pub use crate::domain::entities::{RankedEntry, RawCountRecord, Report, ReportNotice};
    pub use crate::domain::report_date::{DateSelection, ReportDate};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
