//! HTML template rendering handlers for the report page.

mod report;

pub use report::{ReportPageParams, report_page_handler};
