//! Application layer services implementing the report pipeline.
//!
//! Services consume repository traits and hand finished reports to the
//! HTTP handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::report_service::ReportService`] - Ranking assembly and grand total
pub mod services;
