//! Typed order record.
//!
//! One row of the order export, validated once at load time so the
//! aggregations never look fields up by name.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single purchased line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier (one order may span several rows; may be blank)
    pub order_id: Option<String>,

    /// When the order was placed
    pub order_purchase_timestamp: NaiveDateTime,

    /// When the customer received it (None = not delivered yet)
    pub order_delivered_customer_date: Option<NaiveDateTime>,

    pub product_category_name: Option<String>,

    pub payment_type: Option<String>,

    /// Star rating in 1..=5
    pub review_score: Option<u8>,
}

impl OrderRecord {
    /// Create a record with only the required fields set
    pub fn new(order_id: impl Into<String>, purchased: NaiveDateTime) -> Self {
        Self {
            order_id: Some(order_id.into()),
            order_purchase_timestamp: purchased,
            order_delivered_customer_date: None,
            product_category_name: None,
            payment_type: None,
            review_score: None,
        }
    }

    pub fn with_delivery(mut self, delivered: NaiveDateTime) -> Self {
        self.order_delivered_customer_date = Some(delivered);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.product_category_name = Some(category.into());
        self
    }

    pub fn with_payment(mut self, payment: impl Into<String>) -> Self {
        self.payment_type = Some(payment.into());
        self
    }

    pub fn with_review(mut self, score: u8) -> Self {
        self.review_score = Some(score);
        self
    }

    /// Calendar date of the purchase
    pub fn purchase_date(&self) -> NaiveDate {
        self.order_purchase_timestamp.date()
    }

    /// Whole days between purchase and delivery, truncated toward zero
    ///
    /// Returns None for undelivered orders. May be negative (or a
    /// truncated 0) when the export has delivery before purchase; check
    /// `delivered_before_purchase` to tell those apart.
    pub fn shipping_days(&self) -> Option<i64> {
        self.order_delivered_customer_date
            .map(|delivered| (delivered - self.order_purchase_timestamp).num_days())
    }

    /// Delivery timestamp strictly earlier than the purchase timestamp
    pub fn delivered_before_purchase(&self) -> bool {
        self.order_delivered_customer_date
            .is_some_and(|delivered| delivered < self.order_purchase_timestamp)
    }

    /// Identifier for log messages
    pub fn display_id(&self) -> &str {
        self.order_id.as_deref().unwrap_or("<no order_id>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_shipping_days_truncates_partial_days() {
        let record = OrderRecord::new("a", ts("2021-01-01 10:00:00"))
            .with_delivery(ts("2021-01-03 09:59:59"));
        assert_eq!(record.shipping_days(), Some(1));
    }

    #[test]
    fn test_shipping_days_undelivered() {
        let record = OrderRecord::new("a", ts("2021-01-01 10:00:00"));
        assert_eq!(record.shipping_days(), None);
    }

    #[test]
    fn test_shipping_days_negative() {
        let record = OrderRecord::new("a", ts("2021-01-05 00:00:00"))
            .with_delivery(ts("2021-01-02 00:00:00"));
        assert_eq!(record.shipping_days(), Some(-3));
    }

    #[test]
    fn test_same_day_reversed_delivery_is_flagged() {
        let record = OrderRecord::new("a", ts("2021-01-01 20:00:00"))
            .with_delivery(ts("2021-01-01 08:00:00"));
        assert_eq!(record.shipping_days(), Some(0));
        assert!(record.delivered_before_purchase());
    }

    #[test]
    fn test_on_time_delivery_is_not_flagged() {
        let same_instant = OrderRecord::new("a", ts("2021-01-01 08:00:00"))
            .with_delivery(ts("2021-01-01 08:00:00"));
        let undelivered = OrderRecord::new("b", ts("2021-01-01 08:00:00"));
        assert!(!same_instant.delivered_before_purchase());
        assert!(!undelivered.delivered_before_purchase());
    }

    #[test]
    fn test_purchase_date() {
        let record = OrderRecord::new("a", ts("2021-03-04 23:59:00"));
        assert_eq!(record.purchase_date(), NaiveDate::from_ymd_opt(2021, 3, 4).unwrap());
    }
}
