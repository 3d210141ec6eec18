//! Assemble every aggregation into one dashboard report.

use super::counts::{category_order_counts, payment_distribution, yearly_order_counts};
use super::filter::{filter_by_purchase_date, DateRange};
use super::shipping::{average_shipping_days, count_negative_shipping, review_shipping_relation};
use crate::parser::record::OrderRecord;
use crate::parser::schema::{DashboardReport, DataQuality};
use crate::utils::config::SCHEMA_VERSION;
use log::{debug, info, warn};

/// Filter the dataset once and run every aggregation over the result
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Full, unfiltered dataset
/// * `range` - Inclusive purchase-date range
/// * `source` - Label for the dataset (usually its path)
pub fn build_report(records: &[OrderRecord], range: &DateRange, source: &str) -> DashboardReport {
    let filtered = filter_by_purchase_date(records, range);

    info!(
        "Aggregating {} orders between {} and {}",
        filtered.len(),
        range.start(),
        range.end()
    );

    let data_quality = assess_data_quality(&filtered);
    debug!("Data quality: {:?}", data_quality);

    DashboardReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        range: (*range).into(),
        total_orders: filtered.len(),
        yearly_orders: yearly_order_counts(&filtered),
        category_orders: category_order_counts(&filtered),
        avg_shipping_days: average_shipping_days(&filtered),
        payment_distribution: payment_distribution(&filtered),
        review_shipping: review_shipping_relation(&filtered),
        data_quality,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Count the rows each aggregation leaves out
///
/// Orders delivered before purchase are logged here, once per report.
pub fn assess_data_quality(records: &[OrderRecord]) -> DataQuality {
    for record in records.iter().filter(|r| r.delivered_before_purchase()) {
        warn!(
            "Order {} delivered before purchase; excluded from shipping time",
            record.display_id()
        );
    }

    DataQuality {
        negative_shipping: count_negative_shipping(records),
        undelivered: records
            .iter()
            .filter(|r| r.order_delivered_customer_date.is_none())
            .count(),
        missing_order_id: records.iter().filter(|r| r.order_id.is_none()).count(),
        missing_category: records
            .iter()
            .filter(|r| r.product_category_name.is_none())
            .count(),
        missing_payment_type: records.iter().filter(|r| r.payment_type.is_none()).count(),
        missing_review_score: records.iter().filter(|r| r.review_score.is_none()).count(),
    }
}
