//! CSV loader for order exports.
//!
//! Reads the export, resolves columns by header name, and turns each row
//! into an `OrderRecord`. Only rows that cannot be placed on the timeline
//! are skipped and reported; every other field is optional, and values
//! that fail validation are dropped with a warning.

use super::record::OrderRecord;
use crate::utils::config::{
    COL_CATEGORY, COL_DELIVERED, COL_ORDER_ID, COL_PAYMENT, COL_PURCHASE, COL_REVIEW,
    DATETIME_FORMATS, DATE_FORMAT, MAX_REVIEW_SCORE, MIN_REVIEW_SCORE, REQUIRED_COLUMNS,
};
use crate::utils::error::LoadError;
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A problem found on one CSV line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the file (header is line 1)
    pub line: usize,
    pub message: String,
}

/// Loader output: valid records plus what was skipped along the way
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub records: Vec<OrderRecord>,

    /// Rows excluded entirely (missing or unparsable purchase timestamp)
    pub row_errors: Vec<RowError>,

    /// Rows kept, but with an optional field discarded
    pub row_warnings: Vec<RowError>,

    pub rows_read: usize,
}

/// Load an order export from disk
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened
/// * `LoadError::Csv` - header row cannot be read
/// * `LoadError::MissingColumn` - a required column is absent
pub fn load_orders(path: impl AsRef<Path>) -> Result<LoadedDataset, LoadError> {
    let path = path.as_ref();
    info!("Loading orders from: {}", path.display());

    let file = File::open(path)?;
    let dataset = load_orders_from_reader(file)?;

    info!(
        "Loaded {} of {} rows ({} skipped, {} with dropped fields)",
        dataset.records.len(),
        dataset.rows_read,
        dataset.row_errors.len(),
        dataset.row_warnings.len()
    );

    Ok(dataset)
}

/// Load an order export from any reader
///
/// **Public** - used by `load_orders` and by tests with in-memory data
pub fn load_orders_from_reader<R: Read>(reader: R) -> Result<LoadedDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut dataset = LoadedDataset::default();

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, which is line 1
        let line = idx + 2;
        dataset.rows_read += 1;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Line {}: CSV parse error: {}", line, e);
                dataset.row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&row, &columns, line, &mut dataset.row_warnings) {
            Ok(record) => dataset.records.push(record),
            Err(message) => {
                debug!("Line {}: skipped: {}", line, message);
                dataset.row_errors.push(RowError { line, message });
            }
        }
    }

    Ok(dataset)
}

/// Column positions resolved from the header row
#[derive(Debug)]
struct ColumnMap {
    order_id: Option<usize>,
    purchase: usize,
    delivered: Option<usize>,
    category: Option<usize>,
    payment: Option<usize>,
    review: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim(), i))
            .collect();

        for required in REQUIRED_COLUMNS {
            if !index.contains_key(required) {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }

        let optional = |name: &str| {
            let pos = index.get(name).copied();
            if pos.is_none() {
                warn!("Column '{}' not found; treating it as empty", name);
            }
            pos
        };

        Ok(Self {
            order_id: optional(COL_ORDER_ID),
            purchase: index[COL_PURCHASE],
            delivered: optional(COL_DELIVERED),
            category: optional(COL_CATEGORY),
            payment: optional(COL_PAYMENT),
            review: optional(COL_REVIEW),
        })
    }
}

/// Convert one CSV row into a record
///
/// **Private** - Err means the row is excluded
fn parse_row(
    row: &StringRecord,
    columns: &ColumnMap,
    line: usize,
    warnings: &mut Vec<RowError>,
) -> Result<OrderRecord, String> {
    let purchase_raw = cell(row, Some(columns.purchase))
        .ok_or_else(|| format!("missing {}", COL_PURCHASE))?;
    let purchased = parse_timestamp(purchase_raw)
        .ok_or_else(|| format!("unparsable {} '{}'", COL_PURCHASE, purchase_raw))?;

    let mut record = OrderRecord {
        order_id: cell(row, columns.order_id).map(str::to_string),
        order_purchase_timestamp: purchased,
        order_delivered_customer_date: None,
        product_category_name: cell(row, columns.category).map(str::to_string),
        payment_type: cell(row, columns.payment).map(str::to_string),
        review_score: None,
    };

    if let Some(raw) = cell(row, columns.delivered) {
        match parse_timestamp(raw) {
            Some(delivered) => record.order_delivered_customer_date = Some(delivered),
            None => warnings.push(RowError {
                line,
                message: format!("unparsable {} '{}'", COL_DELIVERED, raw),
            }),
        }
    }

    if let Some(raw) = cell(row, columns.review) {
        match parse_review_score(raw) {
            Ok(score) => record.review_score = Some(score),
            Err(message) => warnings.push(RowError { line, message }),
        }
    }

    Ok(record)
}

/// Non-empty trimmed cell value, if the column exists
fn cell(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    row.get(idx?).map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a timestamp in one of the accepted formats
///
/// Bare dates resolve to midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a review score written as "4" or "4.0"
///
/// Exports that pass through a dataframe with missing scores store the
/// column as floats, so integral floats are accepted.
pub fn parse_review_score(s: &str) -> Result<u8, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("unparsable {} '{}'", COL_REVIEW, s))?;

    if value.fract() != 0.0 {
        return Err(format!("non-integer {} '{}'", COL_REVIEW, s));
    }

    if value < MIN_REVIEW_SCORE as f64 || value > MAX_REVIEW_SCORE as f64 {
        return Err(format!(
            "{} {} outside {}..={}",
            COL_REVIEW, s, MIN_REVIEW_SCORE, MAX_REVIEW_SCORE
        ));
    }

    Ok(value as u8)
}
