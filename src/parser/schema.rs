//! Output JSON schema definitions for dashboard reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the report was computed from
    pub source: String,

    /// Inclusive purchase-date range applied before aggregation
    pub range: ReportRange,

    /// Rows inside the range
    pub total_orders: usize,

    /// Orders per calendar year, ascending
    pub yearly_orders: Vec<YearlyOrders>,

    /// Orders per product category, most ordered first
    pub category_orders: Vec<CategoryOrders>,

    /// Mean days from purchase to delivery, 2 decimals (None = no data)
    pub avg_shipping_days: Option<f64>,

    /// Rows per payment method, most used first
    pub payment_distribution: Vec<PaymentCount>,

    /// Mean shipping days per review score, ascending by score
    pub review_shipping: Vec<ReviewShipping>,

    pub data_quality: DataQuality,

    /// Timestamp when report was generated
    pub generated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyOrders {
    pub year: i32,
    pub total_orders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOrders {
    pub category: String,
    pub total_orders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCount {
    pub payment_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewShipping {
    pub review_score: u8,
    pub shipping_days: f64,
}

/// Counters for rows that some aggregation had to leave out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Delivered before purchased; excluded from shipping statistics
    pub negative_shipping: usize,

    /// No delivery timestamp
    pub undelivered: usize,

    /// Blank order id; still counted everywhere
    #[serde(default)]
    pub missing_order_id: usize,

    pub missing_category: usize,
    pub missing_payment_type: usize,
    pub missing_review_score: usize,
}
