//! Dataset loading and schema definitions.
//!
//! This module handles:
//! - Reading the order export CSV
//! - Validating rows into typed records
//! - Defining the report schema

pub mod loader;
pub mod record;
pub mod schema;

// Re-export main types
pub use loader::{load_orders, load_orders_from_reader, parse_timestamp, LoadedDataset, RowError};
pub use record::OrderRecord;
pub use schema::{
    CategoryOrders, DashboardReport, DataQuality, PaymentCount, ReportRange, ReviewShipping,
    YearlyOrders,
};
