//! Utility functions shared by the web page, the API and the CLI.
//!
//! - [`number_format`] - Thousands-separated count rendering

pub mod number_format;
