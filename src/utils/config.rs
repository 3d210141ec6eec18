//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Column names expected in the order export header
pub const COL_ORDER_ID: &str = "order_id";
pub const COL_PURCHASE: &str = "order_purchase_timestamp";
pub const COL_DELIVERED: &str = "order_delivered_customer_date";
pub const COL_CATEGORY: &str = "product_category_name";
pub const COL_PAYMENT: &str = "payment_type";
pub const COL_REVIEW: &str = "review_score";

/// Columns without which a row cannot be placed on the timeline
pub const REQUIRED_COLUMNS: &[&str] = &[COL_PURCHASE];

// Timestamp formats tried in order; bare dates are handled separately.
// `%.f` also matches a missing fraction.
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Review scores are a 1-5 star rating
pub const MIN_REVIEW_SCORE: u8 = 1;
pub const MAX_REVIEW_SCORE: u8 = 5;

/// Categories shown in the text summary (the dashboard charts the top 10)
pub const DEFAULT_TOP_CATEGORIES: usize = 10;
pub const MAX_TOP_CATEGORIES: usize = 1000;

/// Environment variable holding the default dataset path
pub const DATA_ENV_VAR: &str = "ORDERSCOPE_DATA";
