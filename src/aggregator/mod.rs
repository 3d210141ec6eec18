//! Aggregation of order records into dashboard summaries.
//!
//! This module transforms the loaded dataset into:
//! - A date-filtered working set
//! - Order counts per year, category and payment type
//! - Shipping-time statistics, overall and per review score
//!
//! Every function here is pure: it reads a slice and returns a fresh value.

pub mod counts;
pub mod filter;
pub mod report;
pub mod shipping;

// Re-export main types and functions
pub use counts::{category_order_counts, payment_distribution, yearly_order_counts};
pub use filter::{filter_by_purchase_date, DateRange};
pub use report::{assess_data_quality, build_report};
pub use shipping::{average_shipping_days, count_negative_shipping, review_shipping_relation};
