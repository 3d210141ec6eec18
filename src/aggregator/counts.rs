//! Count-based aggregations: orders per year, per category, per payment type.
//!
//! Records with a missing category or payment type are left out of the
//! respective counts rather than collected under a placeholder key.

use crate::parser::record::OrderRecord;
use crate::parser::schema::{CategoryOrders, PaymentCount, YearlyOrders};
use chrono::Datelike;
use log::debug;
use std::collections::BTreeMap;

/// Count orders per calendar year of purchase
///
/// **Public** - ascending by year; years without orders are not emitted
pub fn yearly_order_counts(records: &[OrderRecord]) -> Vec<YearlyOrders> {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        *by_year.entry(record.order_purchase_timestamp.year()).or_insert(0) += 1;
    }

    by_year
        .into_iter()
        .map(|(year, total_orders)| YearlyOrders { year, total_orders })
        .collect()
}

/// Count orders per product category, most ordered first
pub fn category_order_counts(records: &[OrderRecord]) -> Vec<CategoryOrders> {
    let counts = count_descending(
        records
            .iter()
            .filter_map(|r| r.product_category_name.as_deref()),
    );
    debug!("{} distinct categories", counts.len());

    counts
        .into_iter()
        .map(|(category, total_orders)| CategoryOrders {
            category: category.to_string(),
            total_orders,
        })
        .collect()
}

/// Count rows per payment type, most used first
pub fn payment_distribution(records: &[OrderRecord]) -> Vec<PaymentCount> {
    count_descending(records.iter().filter_map(|r| r.payment_type.as_deref()))
        .into_iter()
        .map(|(payment_type, count)| PaymentCount {
            payment_type: payment_type.to_string(),
            count,
        })
        .collect()
}

/// Tally keys and sort by count descending
///
/// **Private** - ties keep the key's natural order, so output is
/// deterministic regardless of input order
fn count_descending<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for key in keys {
        *tally.entry(key).or_insert(0) += 1;
    }

    let mut counts: Vec<(&str, usize)> = tally.into_iter().collect();
    // stable: equal counts stay in key order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
