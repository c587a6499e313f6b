//! Web layer serving the HTML report page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - Pre-formatted rows and header fields

pub mod handlers;
pub mod routes;
pub mod view;
