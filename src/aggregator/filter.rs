//! Inclusive purchase-date range and the filter applied before aggregation.

use crate::parser::record::OrderRecord;
use crate::parser::schema::ReportRange;
use crate::utils::error::AggregateError;
use chrono::NaiveDate;
use log::debug;

/// Inclusive range of purchase dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting start > end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AggregateError> {
        if start > end {
            return Err(AggregateError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First to last purchase date in the dataset (None if empty)
    pub fn spanning(records: &[OrderRecord]) -> Option<Self> {
        let start = records.iter().map(OrderRecord::purchase_date).min()?;
        let end = records.iter().map(OrderRecord::purchase_date).max()?;
        Some(Self { start, end })
    }

    /// Build a range from optional bounds, filling gaps from the dataset span
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        records: &[OrderRecord],
    ) -> Result<Option<Self>, AggregateError> {
        let span = Self::spanning(records);

        let start = match start.or(span.map(|s| s.start)) {
            Some(d) => d,
            None => return Ok(None),
        };
        let end = match end.or(span.map(|s| s.end)) {
            Some(d) => d,
            None => return Ok(None),
        };

        Self::new(start, end).map(Some)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a date falls inside the range (both ends included)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl From<DateRange> for ReportRange {
    fn from(range: DateRange) -> Self {
        ReportRange {
            start: range.start,
            end: range.end,
        }
    }
}

/// Select the records purchased inside the range
///
/// **Public** - returns a fresh collection; the input is never modified
pub fn filter_by_purchase_date(records: &[OrderRecord], range: &DateRange) -> Vec<OrderRecord> {
    let filtered: Vec<OrderRecord> = records
        .iter()
        .filter(|r| range.contains(r.purchase_date()))
        .cloned()
        .collect();

    debug!(
        "Date filter {}..={} kept {} of {} records",
        range.start,
        range.end,
        filtered.len(),
        records.len()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(id: &str, ts: &str) -> OrderRecord {
        OrderRecord::new(id, NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap())
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = DateRange::new(date(2021, 2, 1), date(2021, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            AggregateError::InvalidRange {
                start: date(2021, 2, 1),
                end: date(2021, 1, 1)
            }
        );
    }

    #[test]
    fn test_single_day_range() {
        assert!(DateRange::new(date(2021, 1, 1), date(2021, 1, 1)).is_ok());
    }

    #[test]
    fn test_end_date_is_inclusive_for_whole_day() {
        let records = vec![
            order("a", "2021-01-01 00:00:00"),
            order("b", "2021-01-31 23:59:59"),
            order("c", "2021-02-01 00:00:00"),
        ];
        let range = DateRange::new(date(2021, 1, 1), date(2021, 1, 31)).unwrap();

        let filtered = filter_by_purchase_date(&records, &range);

        let ids: Vec<&str> = filtered.iter().map(|r| r.display_id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_spanning() {
        let records = vec![
            order("a", "2018-06-01 12:00:00"),
            order("b", "2016-09-04 21:15:19"),
            order("c", "2017-01-01 00:00:00"),
        ];
        let span = DateRange::spanning(&records).unwrap();
        assert_eq!(span.start(), date(2016, 9, 4));
        assert_eq!(span.end(), date(2018, 6, 1));

        assert!(DateRange::spanning(&[]).is_none());
    }

    #[test]
    fn test_resolve_fills_missing_bounds() {
        let records = vec![order("a", "2018-01-01 00:00:00"), order("b", "2018-12-31 00:00:00")];

        let range = DateRange::resolve(Some(date(2018, 6, 1)), None, &records)
            .unwrap()
            .unwrap();
        assert_eq!(range.start(), date(2018, 6, 1));
        assert_eq!(range.end(), date(2018, 12, 31));

        assert!(DateRange::resolve(None, None, &[]).unwrap().is_none());
        assert!(DateRange::resolve(Some(date(2019, 1, 1)), None, &records).is_err());
    }
}
