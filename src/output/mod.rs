//! Output writers for dashboard reports.
//!
//! This module handles presenting report data:
//! - JSON reports on disk or stdout
//! - Text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report, write_report_to};
pub use text::{format_shipping_metric, render_summary};
