//! Orderscope
//!
//! Date-filtered summaries of an e-commerce order export: yearly order
//! trend, top product categories, average shipping time, payment-method
//! distribution, and review score against shipping time.
//!
//! This crate provides the core implementation for the
//! `orderscope` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! orderscope report --data orders.csv --start 2017-01-01 --end 2017-12-31 --summary
//! ```
//!
//! Library users load records with [`parser::load_orders`] and pass them,
//! together with an [`aggregator::DateRange`], to
//! [`aggregator::build_report`] or to the individual aggregations.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
