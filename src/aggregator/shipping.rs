//! Shipping-time aggregations.
//!
//! Both aggregations only consider delivered orders. Orders whose delivery
//! timestamp precedes the purchase, even by minutes, are left out; they are
//! reported through `DataQuality` instead of pulling the mean down.

use crate::parser::record::OrderRecord;
use crate::parser::schema::ReviewShipping;
use log::debug;
use std::collections::BTreeMap;

/// Mean days from purchase to delivery, rounded to 2 decimals
///
/// **Public** - None when no delivered order is in the input ("no data")
pub fn average_shipping_days(records: &[OrderRecord]) -> Option<f64> {
    let durations = valid_shipping_days(records);
    let days: Vec<i64> = durations.map(|(_, d)| d).collect();

    mean(&days).map(round_2)
}

/// Mean shipping days per review score, ascending by score
///
/// **Public** - only rows with a score and both timestamps take part;
/// the means are not rounded
pub fn review_shipping_relation(records: &[OrderRecord]) -> Vec<ReviewShipping> {
    let mut by_score: BTreeMap<u8, Vec<i64>> = BTreeMap::new();

    for (record, days) in valid_shipping_days(records) {
        if let Some(score) = record.review_score {
            by_score.entry(score).or_default().push(days);
        }
    }

    debug!("Review relation over {} distinct scores", by_score.len());

    by_score
        .into_iter()
        .filter_map(|(review_score, days)| {
            mean(&days).map(|shipping_days| ReviewShipping {
                review_score,
                shipping_days,
            })
        })
        .collect()
}

/// Count delivered orders whose delivery precedes the purchase
pub fn count_negative_shipping(records: &[OrderRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.delivered_before_purchase())
        .count()
}

/// Delivered records with a non-negative duration, paired with that duration
///
/// **Private** - shared filter for both shipping aggregations
fn valid_shipping_days(
    records: &[OrderRecord],
) -> impl Iterator<Item = (&OrderRecord, i64)> + '_ {
    records
        .iter()
        .filter(|record| !record.delivered_before_purchase())
        .filter_map(|record| record.shipping_days().map(|days| (record, days)))
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

/// Round to 2 decimals, halves to the even neighbour
fn round_2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn shipped(purchased: &str, delivered: &str) -> OrderRecord {
        let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        OrderRecord::new("o", parse(purchased)).with_delivery(parse(delivered))
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let records = vec![
            shipped("2021-01-01 00:00:00", "2021-01-02 00:00:00"),
            shipped("2021-01-01 00:00:00", "2021-01-02 00:00:00"),
            shipped("2021-01-01 00:00:00", "2021-01-01 00:00:00"),
        ];
        // 2 / 3 = 0.666...
        assert_eq!(average_shipping_days(&records), Some(0.67));
    }

    #[test]
    fn test_average_zero_for_same_day_delivery() {
        let records = vec![
            shipped("2021-01-01 08:00:00", "2021-01-01 20:00:00"),
            shipped("2021-03-01 00:00:00", "2021-03-01 00:00:00"),
        ];
        assert_eq!(average_shipping_days(&records), Some(0.0));
    }

    #[test]
    fn test_average_no_data() {
        let undelivered = OrderRecord::new(
            "o",
            NaiveDateTime::parse_from_str("2021-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
        );
        assert_eq!(average_shipping_days(&[]), None);
        assert_eq!(average_shipping_days(&[undelivered]), None);
    }

    #[test]
    fn test_negative_durations_are_excluded() {
        let records = vec![
            shipped("2021-01-01 00:00:00", "2021-01-05 00:00:00"),
            shipped("2021-01-10 00:00:00", "2021-01-01 00:00:00"),
        ];

        assert_eq!(average_shipping_days(&records), Some(4.0));
        assert_eq!(count_negative_shipping(&records), 1);
    }

    #[test]
    fn test_same_day_reversed_delivery_is_excluded() {
        let reversed = shipped("2021-01-01 20:00:00", "2021-01-01 08:00:00").with_review(5);
        let records = vec![reversed.clone()];

        assert_eq!(count_negative_shipping(&records), 1);
        assert_eq!(average_shipping_days(&records), None);
        assert!(review_shipping_relation(&records).is_empty());

        let mixed = vec![reversed, shipped("2021-01-01 00:00:00", "2021-01-03 00:00:00")];
        assert_eq!(average_shipping_days(&mixed), Some(2.0));
    }

    #[test]
    fn test_average_rounds_half_to_even() {
        // 1 day over 8 deliveries = 0.125
        let mut records = vec![shipped("2021-01-01 00:00:00", "2021-01-02 00:00:00")];
        for _ in 0..7 {
            records.push(shipped("2021-01-01 00:00:00", "2021-01-01 00:00:00"));
        }
        assert_eq!(average_shipping_days(&records), Some(0.12));

        // 3 days over 8 deliveries = 0.375
        records[1] = shipped("2021-01-01 00:00:00", "2021-01-03 00:00:00");
        assert_eq!(average_shipping_days(&records), Some(0.38));
    }

    #[test]
    fn test_round_2() {
        assert_eq!(round_2(11.0 / 3.0), 3.67);
        assert_eq!(round_2(0.125), 0.12);
        assert_eq!(round_2(2.5), 2.5);
    }

    #[test]
    fn test_review_relation_requires_score() {
        let records = vec![
            shipped("2021-01-01 00:00:00", "2021-01-05 00:00:00").with_review(4),
            shipped("2021-01-01 00:00:00", "2021-01-03 00:00:00").with_review(4),
            shipped("2021-01-01 00:00:00", "2021-01-20 00:00:00"),
            shipped("2021-01-01 00:00:00", "2021-01-11 00:00:00").with_review(1),
        ];

        let relation = review_shipping_relation(&records);

        assert_eq!(
            relation,
            vec![
                ReviewShipping { review_score: 1, shipping_days: 10.0 },
                ReviewShipping { review_score: 4, shipping_days: 3.0 },
            ]
        );
    }

    #[test]
    fn test_review_relation_means_are_unrounded() {
        let records = vec![
            shipped("2021-01-01 00:00:00", "2021-01-02 00:00:00").with_review(2),
            shipped("2021-01-01 00:00:00", "2021-01-02 00:00:00").with_review(2),
            shipped("2021-01-01 00:00:00", "2021-01-01 00:00:00").with_review(2),
        ];

        let relation = review_shipping_relation(&records);
        assert_eq!(relation[0].shipping_days, 2.0 / 3.0);
    }
}
