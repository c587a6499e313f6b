//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod board;
pub mod health;
pub mod report;

pub use board::board_entry_handler;
pub use health::health_handler;
pub use report::report_handler;
